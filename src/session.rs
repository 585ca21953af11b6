use crate::cli::{Cli, Mode, OutputFormat};
use crate::config::ConfigManager;
use anyhow::{Context, Result, anyhow};
use colored::*;
use console::{Alignment, measure_text_width, pad_str};
use countrynorm::{Country, get_standard_english_name, is_standard_english, normalize_country_name};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::signal;

pub use self::models::{Resolution, Summary};

mod models {
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Resolution {
        pub input: String,
        pub output: String,
        pub matched: bool,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Summary {
        pub total: usize,
        pub matched: usize,
        pub first_unmatched: Option<String>,
    }

    impl Summary {
        pub fn update(&mut self, result: &Resolution) {
            self.total += 1;
            if result.matched {
                self.matched += 1;
            } else if self.first_unmatched.is_none() {
                self.first_unmatched = Some(result.input.clone());
            }
        }

        pub fn passed_through(&self) -> usize {
            self.total - self.matched
        }
    }
}

pub fn resolve(mode: Mode, input: &str) -> Resolution {
    let (output, matched) = match mode {
        Mode::Normalize => {
            let output = normalize_country_name(input);
            (output, output != input)
        }
        Mode::English => {
            let output = get_standard_english_name(input);
            (output, is_standard_english(output))
        }
    };
    if !matched {
        tracing::debug!(input, "no alias found, passing through");
    }

    Resolution {
        input: input.to_string(),
        output: output.to_string(),
        matched,
    }
}

pub struct Session {
    cli: Cli,
    config_manager: ConfigManager,
    mode: Mode,
    format: OutputFormat,
}

impl Session {
    pub fn new(cli: Cli, config_manager: ConfigManager) -> Self {
        let mode = cli
            .mode()
            .or(config_manager.config.mode)
            .unwrap_or_default();
        let format = cli
            .format
            .or(config_manager.config.format)
            .unwrap_or_default();

        Self {
            cli,
            config_manager,
            mode,
            format,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        if self.cli.save_defaults {
            self.config_manager.config.mode = Some(self.mode);
            self.config_manager.config.format = Some(self.format);
            self.config_manager.save()?;
            tracing::info!(path = %self.config_manager.path().display(), "saved defaults");

            // Nothing to resolve: don't fall back to stdin.
            if self.cli.names.is_empty() && self.cli.file.is_none() && !self.cli.list {
                return Ok(());
            }
        }

        if self.cli.list {
            print!("{}", render_country_table());
            return Ok(());
        }

        let mut results = Vec::new();
        let mut summary = Summary::default();

        if !self.cli.names.is_empty() {
            tracing::debug!(count = self.cli.names.len(), "resolving names from arguments");
            for name in &self.cli.names {
                self.handle(name, &mut results, &mut summary);
            }
        } else if let Some(ref path) = self.cli.file {
            tracing::info!(path = %path.display(), "reading names from file");
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open {}", path.display()))?;
            self.handle_lines(BufReader::new(file), &mut results, &mut summary)
                .await?;
        } else {
            tracing::debug!("reading names from stdin");
            self.handle_lines(BufReader::new(tokio::io::stdin()), &mut results, &mut summary)
                .await?;
        }

        match self.format {
            OutputFormat::Plain => {}
            OutputFormat::Json => println!("{}", render_json(&results)?),
            OutputFormat::Table => print!("{}", render_table(&results)),
        }

        if !self.cli.quiet && summary.total > 0 {
            eprintln!("{}", render_summary(&summary));
        }

        if self.cli.strict
            && let Some(ref name) = summary.first_unmatched
        {
            return Err(anyhow!("could not resolve {:?}", name));
        }

        Ok(())
    }

    async fn handle_lines<R>(
        &self,
        reader: R,
        results: &mut Vec<Resolution>,
        summary: &mut Summary,
    ) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let ctrl_c = signal::ctrl_c();
        tokio::pin!(ctrl_c);
        let mut listening = true;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read input")? else {
                        break;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.handle(&line, results, summary);
                }

                res = &mut ctrl_c, if listening => {
                    match res {
                        Ok(()) => break,
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to listen for ctrl-c");
                            listening = false;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn handle(&self, name: &str, results: &mut Vec<Resolution>, summary: &mut Summary) {
        let result = resolve(self.mode, name);
        summary.update(&result);

        // Plain output streams; the other formats need every row first.
        if self.format == OutputFormat::Plain {
            println!("{}", result.output);
        } else {
            results.push(result);
        }
    }
}

pub fn render_json(results: &[Resolution]) -> Result<String> {
    serde_json::to_string_pretty(results).context("Failed to serialize results")
}

/// Left-aligns by terminal column width, so CJK text counts double.
fn pad(text: &str, width: usize) -> String {
    pad_str(text, width, Alignment::Left, None).into_owned()
}

pub fn render_table(results: &[Resolution]) -> String {
    let mut w_input = "Input".len();
    let mut w_output = "Output".len();
    for r in results {
        w_input = w_input.max(measure_text_width(&r.input));
        w_output = w_output.max(measure_text_width(&r.output));
    }

    let mut out = format!(
        "{} | {}\n",
        pad("Input", w_input).bold(),
        pad("Output", w_output).bold(),
    );

    for r in results {
        let output = pad(&r.output, w_output);
        let output = if r.matched { output.green() } else { output.yellow() };
        out.push_str(&format!("{} | {}\n", pad(&r.input, w_input), output));
    }

    out
}

pub fn render_country_table() -> String {
    let w_english = Country::ALL
        .iter()
        .map(|c| measure_text_width(c.english_name()))
        .max()
        .unwrap_or(0)
        .max("English".len());
    let w_chinese = Country::ALL
        .iter()
        .map(|c| measure_text_width(c.chinese_name()))
        .max()
        .unwrap_or(0)
        .max("Chinese".len());

    let mut out = format!(
        "{} | {} | {}\n",
        pad("English", w_english).bold(),
        pad("Chinese", w_chinese).bold(),
        "Code".bold(),
    );

    for c in Country::ALL {
        out.push_str(&format!(
            "{} | {} | {}\n",
            pad(c.english_name(), w_english),
            pad(c.chinese_name(), w_chinese),
            c.code(),
        ));
    }

    out
}

pub fn render_summary(summary: &Summary) -> String {
    let line = format!(
        "{} names, {} resolved, {} passed through",
        summary.total,
        summary.matched,
        summary.passed_through()
    );
    if summary.passed_through() > 0 {
        line.yellow().to_string()
    } else {
        line.green().to_string()
    }
}
