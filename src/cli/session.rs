// ============================================================
// Layer 1 — Console Sessions
// ============================================================
// The line-oriented surfaces around the pipeline:
//   - the interactive prompt loop
//   - the example-question runner
//   - the "how it works" screen
//
// All of them write to a generic `Write` and read from a generic
// `BufRead`, so tests drive them with in-memory buffers instead
// of a terminal.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::data::example_questions::ExampleQuestion;
use crate::domain::traits::QuestionAnswerer;

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

pub const TOPIC_TIP: &str =
    "(Tip: Try questions about 'gravity', 'solar system', 'photosynthesis', or 'electricity'.)";

/// Read one line; `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Prompt loop. Returns how many questions were answered.
///
/// Ends on a quit word or end of input. Blank lines re-prompt.
/// A '?' is appended to questions that lack one.
pub fn run_interactive<A, R, W>(answerer: &A, mut input: R, out: &mut W) -> Result<usize>
where
    A: QuestionAnswerer + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "🎯 Interactive RAG Demo")?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "Ask questions about:")?;
    writeln!(out, "📡 Solar System and planets")?;
    writeln!(out, "🌱 Photosynthesis in plants")?;
    writeln!(out, "⚡ Basic electricity concepts")?;
    writeln!(out, "🌍 Gravity and orbits")?;
    writeln!(out, "\n💡 Tips:")?;
    writeln!(out, "- Use keywords that might appear in science textbooks")?;
    writeln!(out, "- Ask about concepts, not specific facts")?;
    writeln!(out, "- Try variations of the example questions")?;
    writeln!(out, "\nType 'quit', 'exit', or 'q' to finish\n")?;

    let mut question_count = 0usize;

    loop {
        write!(out, "🤔 Your question: ")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(out)?;
            break;
        };
        let mut question = line.trim().to_string();

        if QUIT_WORDS.contains(&question.to_lowercase().as_str()) {
            break;
        }

        if question.is_empty() {
            writeln!(out, "Please ask a question or type 'quit' to exit.")?;
            continue;
        }

        if !question.ends_with('?') {
            question.push('?');
        }

        question_count += 1;
        tracing::info!(question = %question, "interactive question");

        writeln!(out, "\n🤖 RAG System Processing...")?;
        writeln!(out, "{}", "-".repeat(50))?;
        writeln!(out, "{}", answerer.answer(&question))?;
        writeln!(out, "\n{}", "-".repeat(50))?;
    }

    writeln!(out, "\n🎉 Thanks for trying the RAG tutorial!")?;
    writeln!(out, "You asked {question_count} questions. Great job exploring! 👋")?;
    Ok(question_count)
}

/// One question, one answer, then the topic tip.
pub fn write_single_answer<A, W>(answerer: &A, question: &str, out: &mut W) -> Result<()>
where
    A: QuestionAnswerer + ?Sized,
    W: Write,
{
    writeln!(out, "\nAnswer:\n")?;
    writeln!(out, "{}", answerer.answer(question))?;
    writeln!(out, "\n{TOPIC_TIP}")?;
    Ok(())
}

/// Feed each example through the answerer and print the result.
///
/// With `pause`, waits for a line on `input` between examples
/// (end of input stops waiting but the remaining examples still run).
pub fn run_examples<A, R, W>(
    answerer: &A,
    examples: &[ExampleQuestion],
    pause:    bool,
    mut input: R,
    out:      &mut W,
) -> Result<()>
where
    A: QuestionAnswerer + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "🚀 RAG Tutorial - Example Questions")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "Watch how the system retrieves relevant passages and cites them.\n")?;

    let mut waiting = pause;

    for (i, example) in examples.iter().enumerate() {
        writeln!(out, "📝 Example {}: {}", i + 1, example.topic)?;
        writeln!(out, "{}", "-".repeat(50))?;
        writeln!(out, "Question: {}", example.question)?;
        writeln!(out, "Focus: {}", example.explanation)?;
        writeln!(out, "\n🤖 RAG System Answer:")?;
        writeln!(out, "{}", answerer.answer(example.question))?;
        writeln!(out, "\n{}\n", "=".repeat(70))?;

        if waiting && i + 1 < examples.len() {
            write!(out, "Press Enter to continue to the next example...")?;
            out.flush()?;
            if read_line(&mut input)?.is_none() {
                waiting = false;
            }
        }
    }
    Ok(())
}

/// The six-step explanation of the pipeline.
pub fn write_system_info<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "ℹ️  How This RAG System Works")?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "1. 📝 PREPROCESSING: Your question is cleaned and tokenized")?;
    writeln!(out, "2. 🔍 VECTORIZATION: Words are converted to numerical vectors")?;
    writeln!(out, "3. 📊 SIMILARITY: Cosine similarity finds relevant documents")?;
    writeln!(out, "4. 🎯 RETRIEVAL: Top matching documents are selected")?;
    writeln!(out, "5. ✍️  GENERATION: Answer is created using retrieved content")?;
    writeln!(out, "6. 📚 CITATION: Sources are provided with similarity scores")?;
    writeln!(out, "\nThis demonstrates the core concepts used in modern search engines!")?;
    writeln!(out, "{}", "-".repeat(60))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;

    use crate::data::example_questions::EXAMPLE_QUESTIONS;

    /// Records every question it is asked
    #[derive(Default)]
    struct Recorder {
        asked: RefCell<Vec<String>>,
    }

    impl QuestionAnswerer for Recorder {
        fn answer(&self, question: &str) -> String {
            self.asked.borrow_mut().push(question.to_string());
            format!("ANSWER[{question}]")
        }
    }

    fn run(input: &str) -> (usize, Vec<String>, String) {
        let recorder = Recorder::default();
        let mut out  = Vec::new();
        let count    = run_interactive(&recorder, Cursor::new(input), &mut out).unwrap();
        (count, recorder.asked.into_inner(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quit_words_end_loop() {
        for word in ["quit", "EXIT", " q "] {
            let (count, asked, _) = run(&format!("{word}\nnever asked\n"));
            assert_eq!(count, 0);
            assert!(asked.is_empty());
        }
    }

    #[test]
    fn test_appends_question_mark() {
        let (count, asked, out) = run("what is gravity\nwhy?\nquit\n");
        assert_eq!(count, 2);
        assert_eq!(asked, vec!["what is gravity?", "why?"]);
        assert!(out.contains("ANSWER[what is gravity?]"));
        assert!(out.contains("You asked 2 questions."));
    }

    #[test]
    fn test_blank_line_reprompts_without_counting() {
        let (count, asked, out) = run("\n   \nsun\nq\n");
        assert_eq!(count, 1);
        assert_eq!(asked, vec!["sun?"]);
        assert_eq!(out.matches("Please ask a question").count(), 2);
    }

    #[test]
    fn test_end_of_input_ends_loop() {
        let (count, asked, out) = run("gravity");
        assert_eq!(count, 1);
        assert_eq!(asked, vec!["gravity?"]);
        assert!(out.contains("You asked 1 questions."));
    }

    #[test]
    fn test_banner_lists_tips() {
        let (_, _, out) = run("q\n");
        assert!(out.contains("💡 Tips:"));
        assert!(out.contains("- Use keywords that might appear in science textbooks"));
        assert!(out.contains("- Ask about concepts, not specific facts"));
        assert!(out.contains("- Try variations of the example questions"));
    }

    #[test]
    fn test_single_answer_ends_with_topic_tip() {
        let recorder = Recorder::default();
        let mut out  = Vec::new();
        write_single_answer(&recorder, "Why do planets orbit the Sun?", &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(recorder.asked.into_inner(), vec!["Why do planets orbit the Sun?"]);
        assert!(out.contains("ANSWER[Why do planets orbit the Sun?]"));
        assert!(out.trim_end().ends_with(TOPIC_TIP));
    }

    #[test]
    fn test_examples_ask_every_question_in_order() {
        let recorder = Recorder::default();
        let mut out  = Vec::new();
        run_examples(&recorder, &EXAMPLE_QUESTIONS, false, Cursor::new(""), &mut out).unwrap();

        let expected: Vec<String> = EXAMPLE_QUESTIONS.iter().map(|e| e.question.to_string()).collect();
        assert_eq!(recorder.asked.into_inner(), expected);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("📝 Example 6: Gravity and Orbits"));
        assert!(!out.contains("Press Enter"));
    }

    #[test]
    fn test_examples_pause_between_but_not_after_last() {
        let recorder = Recorder::default();
        let mut out  = Vec::new();
        run_examples(&recorder, &EXAMPLE_QUESTIONS, true, Cursor::new("\n\n\n\n\n"), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Press Enter").count(), EXAMPLE_QUESTIONS.len() - 1);
    }

    #[test]
    fn test_system_info_lists_six_steps() {
        let mut out = Vec::new();
        write_system_info(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("1. 📝 PREPROCESSING"));
        assert!(out.contains("6. 📚 CITATION"));
    }
}
