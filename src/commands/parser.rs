use std::path::PathBuf;

/// Commands understood by the binary
#[derive(Debug, PartialEq)]
pub enum Command {
    Add {
        key: String,
        file: PathBuf,
    },
    Get {
        key: String,
    },
    Resize {
        width: i32,
        height: i32,
        suffix: String,
        paths: Vec<String>,
    },
    Help,
    Unknown(String),
}

// Parse command-line arguments (without the program name) into a Command
pub fn parse_command<S: AsRef<str>>(args: &[S]) -> Command {
    let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
    let Some((name, rest)) = args.split_first() else {
        return Command::Help;
    };

    let unknown = || Command::Unknown(args.join(" "));

    match name.to_ascii_lowercase().as_str() {
        "help" | "-h" | "--help" => Command::Help,
        "add" => match rest {
            [key, file] => Command::Add {
                key: key.to_string(),
                file: PathBuf::from(file),
            },
            _ => unknown(),
        },
        "get" => match rest {
            [key] => Command::Get {
                key: key.to_string(),
            },
            _ => unknown(),
        },
        "resize" => parse_resize(rest).unwrap_or_else(unknown),
        _ => unknown(),
    }
}

fn parse_resize(args: &[&str]) -> Option<Command> {
    let (width, height, rest): (i32, i32, &[&str]) = match args {
        [width, height, rest @ ..] => (width.parse().ok()?, height.parse().ok()?, rest),
        _ => return None,
    };

    let mut suffix = String::new();
    let mut paths = Vec::new();
    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        match *arg {
            "--suffix" | "-s" => suffix = iter.next()?.to_string(),
            path => paths.push(path.to_string()),
        }
    }

    Some(Command::Resize {
        width,
        height,
        suffix,
        paths,
    })
}
