// Generated block constants (no magic values in rendering code)

/// Default task runner, resolved on PATH
pub const DEFAULT_RUNNER: &str = "rake";

/// Any line containing this token starts the generated block
pub const BEGIN_MARKER_TOKEN: &str = "BEGIN RAKETABS";

pub const BEGIN_MARKER_LINE: &str = "# BEGIN RAKETABS GENERATED TASKS - DO NOT EDIT MANUALLY";

pub const END_MARKER_LINE: &str = "# END RAKETABS GENERATED TASKS";

/// `logger -t` tag receiving task output
pub const LOG_TAG: &str = "RAKETAB";
