use anyhow::Result;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};

pub fn set_hook() {
    // setup a panic hook to easily exit the program on panic
    std::panic::set_hook(Box::new(|panic_info| {
        // print the panic message
        let message = if let Some(message) = panic_info.payload().downcast_ref::<String>() {
            message.clone()
        } else if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else {
            format!("{panic_info:?}")
        };

        // add some color
        log::error!("{}", message);

        #[cfg(debug_assertions)]
        log::debug!("{}", panic_info);

        std::process::exit(1);
    }));
}

/// Dialoguer hides the cursor while prompting and does not restore it when
/// interrupted.
pub fn clean_term() {
    let term = console::Term::stdout();
    term.show_cursor().ok();
}

pub fn logs(verbose: bool) {
    let colors = ColoredLevelConfig::new()
        .info(Color::BrightCyan)
        .error(Color::BrightRed)
        .warn(Color::BrightYellow)
        .debug(Color::BrightWhite);

    let applied = fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = record.level();

            match level {
                Level::Debug => out.finish(format_args!(
                    "{} [{}]: {}",
                    colors.color(Level::Debug).to_string().to_lowercase(),
                    record.target(),
                    message
                )),

                level => out.finish(format_args!(
                    "{}: {}",
                    colors.color(level).to_string().to_lowercase(),
                    message
                )),
            }
        })
        .level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| !matches!(metadata.level(), Level::Error | Level::Warn))
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .level(LevelFilter::Warn)
                .chain(std::io::stderr()),
        )
        .apply();

    if applied.is_err() {
        eprintln!("Logger was already initialized");
    }
}

/// Splits a comma separated list, trimming entries and dropping empty ones.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Trims entries and drops empty ones and repeats, keeping the first occurrence.
pub fn dedupe_trimmed<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = vec![];

    for item in items {
        let item = item.as_ref().trim();

        if !item.is_empty() && !out.iter().any(|existing| existing == item) {
            out.push(item.to_string());
        }
    }

    out
}

/// Returns `value`, or asks for it when it was not given on the command line.
pub fn text_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(Into::into),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("React, Rust ,  ,Go"), vec!["React", "Rust", "Go"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_dedupe_trimmed() {
        assert_eq!(
            dedupe_trimmed(["React", " React ", "", "Rust"]),
            vec!["React", "Rust"]
        );
    }
}
