use wafplan::{PolicyBuilder, PolicyError};

fn main() {
    // Trusted traffic bypasses every managed rule: the allow-list rule
    // holds priority 0 and is evaluated first.
    let document = PolicyBuilder::for_resource("MyApp")
        .allow_list("arn:example:ipset/trusted-offices")
        .assemble()
        .expect("failed to assemble policy");

    for (name, priority) in document.rule_order() {
        println!("{priority:>3}  {name}");
    }

    // A blank reference is a configuration mistake, not "no allow list".
    let mistake = PolicyBuilder::for_resource("MyApp").allow_list("").assemble();
    match mistake {
        Err(PolicyError::InvalidAllowListReference) => {
            println!("blank reference rejected, as expected");
        }
        other => println!("unexpected outcome: {other:?}"),
    }
}
