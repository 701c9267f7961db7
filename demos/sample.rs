use optbind::{derive::*, prelude::*, Rejection};

#[derive(Debug, Default, CommandLine)]
#[optbind(
    program = "sample",
    pre = "Greets somebody, some number of times."
)]
struct Greeting {
    #[optbind(short = 'c', long = "count", default = 1, help = "How many times to greet.")]
    count: u32,
    #[optbind(short = 'l', long = "loud", help = "Shout the greeting.")]
    loud: bool,
    #[optbind(short = 's', help = "The salutation.", validate = not_blank)]
    salutation: String,
    #[optbind(target, required, help = "Who to greet.")]
    name: String,
}

fn not_blank(value: &String) -> Result<(), Rejection> {
    if value.trim().is_empty() {
        Err("must not be blank".into())
    } else {
        Ok(())
    }
}

fn main() {
    let greeting = Greeting::parse();
    let salutation = if greeting.salutation.is_empty() {
        "Hello"
    } else {
        greeting.salutation.as_str()
    };

    for _ in 0..greeting.count {
        let line = format!("{salutation}, {}!", greeting.name);

        if greeting.loud {
            println!("{}", line.to_uppercase());
        } else {
            println!("{line}");
        }
    }
}
