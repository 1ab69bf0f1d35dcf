use customs::io::{self, Input};

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    env_logger::init();

    let args = std::env::args().collect::<Vec<_>>();

    if args.len() > 2 {
        eprintln!("Usage: {} [input file, defaults to stdin]", args[0]);
        std::process::exit(1);
    }

    let input = Input::from_arg(args.get(1).map(String::as_str));
    let text = io::load(&input)?;

    let (part_one, part_two) = customs::solve(&text);

    println!("{}", part_one);
    println!("{}", part_two);

    Ok(())
}
