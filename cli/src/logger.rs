use std::io::IsTerminal;

pub struct ColoredLogger;

impl log::Log for ColoredLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.target().starts_with("coi") || metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level();
        let msg = record.args();
        let target = record.target();

        let color = match level {
            log::Level::Info => "\x1b[36m",  // Cyan
            log::Level::Warn => "\x1b[33m",  // Yellow
            log::Level::Error => "\x1b[31m", // Red
            log::Level::Debug => "\x1b[35m", // Magenta
            log::Level::Trace => "\x1b[37m", // White
        };

        // stdout carries the confirmation line only
        if std::io::stderr().is_terminal() {
            let reset = "\x1b[0m";
            let bold = "\x1b[1m";
            eprintln!("{color}{bold}[{target}]{reset} {msg}");
        } else {
            eprintln!("[{target}] {msg}");
        }
    }

    fn flush(&self) {}
}

pub static LOGGER: ColoredLogger = ColoredLogger;
