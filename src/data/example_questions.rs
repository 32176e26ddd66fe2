// ============================================================
// Layer 4 — Example Questions
// ============================================================
// The fixed batch fed through `simple-rag examples`.
// Each entry names the library topic it is expected to hit and
// what it exercises.

/// One canned question for the example runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleQuestion {
    pub question:    &'static str,
    pub topic:       &'static str,
    pub explanation: &'static str,
}

pub const EXAMPLE_QUESTIONS: [ExampleQuestion; 6] = [
    ExampleQuestion {
        question:    "Why do planets orbit the Sun?",
        topic:       "Gravity and Orbits",
        explanation: "Tests understanding of gravitational forces",
    },
    ExampleQuestion {
        question:    "How does photosynthesis work in plants?",
        topic:       "Photosynthesis",
        explanation: "Tests biological process knowledge",
    },
    ExampleQuestion {
        question:    "What is electric current?",
        topic:       "Basic Electricity",
        explanation: "Tests physics concepts about electricity",
    },
    ExampleQuestion {
        question:    "Tell me about the solar system",
        topic:       "Solar System",
        explanation: "Tests general astronomy knowledge",
    },
    ExampleQuestion {
        question:    "What is Ohm's Law?",
        topic:       "Basic Electricity",
        explanation: "Tests specific physics formulas",
    },
    ExampleQuestion {
        question:    "How do moons orbit planets?",
        topic:       "Gravity and Orbits",
        explanation: "Tests orbital mechanics understanding",
    },
];
