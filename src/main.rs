// ABOUTME: Entry point for archlog: appends lifecycle hook events to the active session log.
// ABOUTME: Parses CLI args, loads config, and dispatches the event to the EventLogger.

fn main() {
    architect_logger::cli::main_entry();
}
