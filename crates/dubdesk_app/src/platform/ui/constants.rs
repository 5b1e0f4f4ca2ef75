/// Usage line shown at startup and after an unknown command.
pub const HELP: &str = "commands: purge | submit <youtube-url> | quit";

/// Name of the form field the console fills in when submitting a job.
pub const FIELD_YOUTUBE_URL: &str = "youtube_url";

/// Character width of the rendered progress bar.
pub const BAR_WIDTH: usize = 20;
