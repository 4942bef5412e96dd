use wafplan::PolicyBuilder;

fn main() {
    // Assemble the default policy: nine managed rule groups, allow by
    // default, global edge scope.
    let document = PolicyBuilder::for_resource("MyApp")
        .assemble()
        .expect("failed to assemble policy");

    println!("{document}");
    for rule in document.rules() {
        println!("  {rule}");
    }

    println!("{}", document.to_json_pretty().expect("failed to serialize"));
}
