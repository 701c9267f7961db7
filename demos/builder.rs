use optbind::{Binding, CommandLineParser, Field, OptionDescriptor, Usage};

#[derive(Debug, Default)]
struct Summer {
    verbose: bool,
    start: i64,
    item: i64,
}

fn main() {
    let summer = CommandLineParser::new()
        .usage(Usage::new("summer").post("Adds ITEM onto START."))
        .add(Binding::new(
            OptionDescriptor::option('v', "Print the operands.").long("verbose"),
            Field::new(|s: &mut Summer| &mut s.verbose),
        ))
        .add(Binding::new(
            OptionDescriptor::option('s', "The starting value.")
                .long("start")
                .initial(10),
            Field::new(|s: &mut Summer| &mut s.start),
        ))
        .add(Binding::new(
            OptionDescriptor::target("The value to add.").required(),
            Field::new(|s: &mut Summer| &mut s.item),
        ))
        .build()
        .parse()
        .into_inner();

    if summer.verbose {
        println!("{summer:?}");
    }

    println!("Sum: {}", summer.start + summer.item);
}
