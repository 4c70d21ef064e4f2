use stylog::{Logger, MemorySink, args};

#[derive(stylog::Loggable)]
enum Status {
    Active,
    #[loggable(rename = "on_hold")]
    OnHold { reason: String },
    Retrying(u32, #[loggable(skip)] std::time::Instant),
}

#[derive(stylog::Loggable)]
enum Never {}

fn main() {
    let logger = Logger::new(MemorySink::new());
    logger.info(args!["status", Status::Active]);
    logger.info(args![Status::OnHold {
        reason: "review".into()
    }]);
    logger.info(args![Status::Retrying(2, std::time::Instant::now())]);
    let _ = |never: &Never| stylog::Loggable::to_log_value(never);
}
