pub mod rule_report_logger;
