// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers to answer questions.
//
// Rules for this layer:
//   - No scoring math here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - Only picks a document source and drives the pipeline

// Load a corpus once, answer many questions against it
pub mod ask_use_case;
