//! `statelex-template`: print the tokens of a template file.
//!
//! Each token is printed on its own line as `<index>\t<kind>\t<text>`.
//! A scan error is reported on stderr and exits with status 1.

mod cli;

use statelex::{LexerOptions, Token};
use statelex_template::{init_tracing, lexer, TemplateKind};

use cli::{CliOptions, Mode, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match CliOptions::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let content = match std::fs::read_to_string(&options.path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: cannot read '{}': {err}", options.path.display());
            std::process::exit(1);
        }
    };

    let name = options.path.display().to_string();
    tracing::debug!(file = %name, mode = ?options.mode, bytes = content.len(), "tokenizing");
    let lexer = lexer(&name, &content)
        .with_options(LexerOptions::default().with_capacity(options.capacity));

    let mut printer = Printer::default();
    match options.mode {
        Mode::Pull => lexer.pull().for_each(|token| printer.print(&token)),
        Mode::Sync => lexer.run_sync().for_each(|token| printer.print(&token)),
        Mode::Push => {
            let finished = std::thread::scope(|scope| {
                let mut stream = lexer.spawn(scope);
                while let Some((token, _)) = stream.listen() {
                    printer.print(&token);
                }
                stream.finish()
            });
            if let Err(err) = finished {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }

    if printer.failed {
        std::process::exit(1);
    }
}

#[derive(Default)]
struct Printer {
    index: usize,
    failed: bool,
}

impl Printer {
    fn print(&mut self, token: &Token<'_, TemplateKind>) {
        match token {
            Token::User { kind, .. } => println!("{}\t{kind}\t{token}", self.index),
            Token::EndOfStream => println!("{}\t{token}", self.index),
            Token::Error(err) => {
                eprintln!("error: {err}");
                self.failed = true;
            }
        }
        self.index += 1;
    }
}
