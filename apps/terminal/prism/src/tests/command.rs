use crate::command::Command;

use std::path::PathBuf;

/// **VALUE**: Anything not starting with ':' is text to translate, verbatim.
#[test]
fn given_plain_line_when_parsed_then_translate_with_original_text() {
    assert_eq!(
        Command::parse("  hello: world  \n"),
        Some(Command::Translate(String::from("  hello: world  ")))
    );
}

#[test]
fn given_blank_line_when_parsed_then_none() {
    assert_eq!(Command::parse("   \r\n"), None);
}

#[test]
fn given_colon_commands_when_parsed_then_map_to_controls() {
    assert_eq!(Command::parse(":send"), Some(Command::Send));
    assert_eq!(Command::parse(":lang"), Some(Command::ToggleUiLanguage));
    assert_eq!(Command::parse(":targets"), Some(Command::ToggleTargets));
    assert_eq!(Command::parse(":target"), Some(Command::ToggleTargets));
    assert_eq!(
        Command::parse(":target  ja "),
        Some(Command::Target(String::from("ja")))
    );
    assert_eq!(Command::parse(":model"), Some(Command::ToggleModels));
    assert_eq!(
        Command::parse(":model advanced"),
        Some(Command::Model(String::from("advanced")))
    );
    assert_eq!(
        Command::parse(":attach /tmp/my notes.txt"),
        Some(Command::Attach(PathBuf::from("/tmp/my notes.txt")))
    );
    assert_eq!(Command::parse(":detach"), Some(Command::Detach));
    assert_eq!(Command::parse(":clear"), Some(Command::Clear));
    assert_eq!(Command::parse(":?"), Some(Command::Help));
    assert_eq!(Command::parse(":q"), Some(Command::Quit));
}

#[test]
fn given_unknown_or_incomplete_command_when_parsed_then_unknown() {
    assert_eq!(
        Command::parse(":frobnicate"),
        Some(Command::Unknown(String::from(":frobnicate")))
    );
    assert_eq!(
        Command::parse(":attach"),
        Some(Command::Unknown(String::from(":attach")))
    );
}
