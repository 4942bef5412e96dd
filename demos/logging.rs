use wafplan::{LoggingConfig, PolicyBuilder};

fn main() {
    let document = PolicyBuilder::for_resource("MyApp")
        .assemble()
        .expect("failed to assemble policy");

    // The log destination is named after the document; retention is a
    // stated preference the provisioning layer enforces.
    let logging = LoggingConfig::for_document(&document);
    println!("log group:  {}", logging.log_group());
    println!("retention:  {} days", logging.retention_days());
}
