//! Analyzer backed by an external process
//!
//! The text is written to the program's standard input and its standard
//! output is read as CoNLL-U. The default program is `ginza`, whose CLI emits
//! CoNLL-U unless told otherwise.

use super::analyzer::{MorphologicalAnalyzer, TokenStream};
use super::conllu;
use crate::error::AnalyzerError;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

/// Default analyzer executable
pub const DEFAULT_PROGRAM: &str = "ginza";

/// Process-backed [`MorphologicalAnalyzer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandAnalyzer {
    /// Executable name or path
    pub program: String,
    /// Extra arguments
    pub args: Vec<String>,
}

impl Default for CommandAnalyzer {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: Vec::new(),
        }
    }
}

impl CommandAnalyzer {
    /// Analyzer running `program` with no extra arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the program over `text` and return its standard output
    fn run(&self, text: &str) -> Result<String, AnalyzerError> {
        log::debug!("spawning analyzer {} {:?}", self.program, self.args);

        let unavailable = |source| AnalyzerError::Unavailable {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(unavailable)?;

        // Feed stdin from another thread so a full stdout pipe cannot block us
        let mut stdin = child.stdin.take().ok_or_else(|| {
            unavailable(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "analyzer stdin was not captured",
            ))
        })?;
        let input = text.to_string();
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output().map_err(unavailable)?;
        let write_result = writer.join().unwrap_or_else(|_| {
            Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "analyzer stdin writer panicked",
            ))
        });

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::debug!("analyzer {} exited with {}", self.program, output.status);
            return Err(AnalyzerError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr,
            });
        }
        match write_result {
            // The analyzer may answer without consuming all of its input
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                log::debug!("analyzer {} closed its input early", self.program);
            }
            Err(e) => return Err(unavailable(e)),
            Ok(()) => {}
        }

        String::from_utf8(output.stdout).map_err(|e| AnalyzerError::MalformedOutput {
            line: 0,
            reason: format!("analyzer output is not UTF-8: {e}"),
        })
    }
}

impl MorphologicalAnalyzer for CommandAnalyzer {
    fn segment<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>, AnalyzerError> {
        if text.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }

        let stdout = self.run(text)?;
        let tokens = conllu::parse(&stdout)?;
        log::debug!("analyzer {} produced {} tokens", self.program, tokens.len());
        Ok(Box::new(tokens.into_iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let analyzer = CommandAnalyzer::new("ginza").arg("-m").args(["ja_ginza", "-s"]);
        assert_eq!(analyzer.program, "ginza");
        assert_eq!(analyzer.args, vec!["-m", "ja_ginza", "-s"]);
        assert_eq!(CommandAnalyzer::default().program, DEFAULT_PROGRAM);
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let analyzer = CommandAnalyzer::new("seiki-no-such-analyzer-binary");
        let err = analyzer.segment("テスト").err().unwrap();
        assert!(matches!(err, AnalyzerError::Unavailable { .. }));
    }

    #[test]
    fn test_empty_text_skips_process() {
        let analyzer = CommandAnalyzer::new("seiki-no-such-analyzer-binary");
        assert_eq!(analyzer.segment("").unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_reads_conllu_from_child() {
        // `cat` echoes a prepared CoNLL-U document back
        let analyzer = CommandAnalyzer::new("cat");
        let document = "1\t猫\t猫\tNOUN\t名詞-普通名詞-一般\t_\t0\troot\t_\t_\n";
        let tokens: Vec<_> = analyzer.segment(document).unwrap().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].surface, "猫");
    }

    #[cfg(unix)]
    #[test]
    fn test_unread_input_is_not_an_error() {
        // Answers without reading stdin, so a large write hits a closed pipe
        let analyzer = CommandAnalyzer::new("sh").args([
            "-c",
            "exec 0<&-; printf '1\\t猫\\t猫\\tNOUN\\t名詞\\t_\\t0\\troot\\t_\\t_\\n'",
        ]);
        let text = "猫".repeat(200_000);
        let tokens: Vec<_> = analyzer.segment(&text).unwrap().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lemma, "猫");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program() {
        let analyzer = CommandAnalyzer::new("sh").args(["-c", "echo broken >&2; exit 3"]);
        match analyzer.segment("テスト").err().unwrap() {
            AnalyzerError::Failed { stderr, .. } => assert_eq!(stderr, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
