use crate::common::*;

#[doc = "Custom log line layout: [timestamp][LEVEL] message"]
fn console_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}][{}] {}",
        now.now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

#[doc = r#"
    Installs the process-wide logger.

    Log lines are written both to stdout and to daily-rotated files under
    `logs/`, keeping the last seven rotations.

    # Panics
    When the logger cannot be initialized; running blind is not acceptable
    for a service whose failures are diagnosed from its log files.
"#]
pub fn set_global_logger() {
    let handle = Logger::try_with_str("info")
        .unwrap_or_else(|e| panic!("[logger_utils->set_global_logger] invalid log spec: {e}"))
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format(console_format)
        .start()
        .unwrap_or_else(|e| panic!("[logger_utils->set_global_logger] failed to start logger: {e}"));

    /* The handle must stay alive for the whole process, otherwise the
    file writer is flushed and closed on drop. */
    std::mem::forget(handle);
}
