use crate::board::PlayerId;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command<'a> {
    Settings(Setting<'a>),
    Update(Update<'a>),
    ActionMove { timebank_ms: u64 },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Setting<'a> {
    TimeBank(u64),
    TimePerMove(u64),
    PlayerNames(&'a str),
    YourBot(&'a str),
    YourBotId(PlayerId),
    FieldWidth(u32),
    FieldHeight(u32),
    MaxRounds(u32),
    Other { key: &'a str, value: &'a str },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Update<'a> {
    GameRound(u32),
    GameField(&'a str),
    LivingCells { player: &'a str, count: u32 },
    Other {
        target: &'a str,
        key: &'a str,
        value: &'a str,
    },
}

impl<'a> Command<'a> {
    pub fn parse(input: &'a str) -> Result<Command, nom::Err<nom::error::Error<&str>>> {
        parse::command()(input).map(|(left, command)| {
            assert!(left.is_empty());
            command
        })
    }
}

mod parse {
    use std::fmt::Debug;
    use std::str::FromStr;

    use nom::branch::alt;
    use nom::bytes::complete::{tag, take_while, take_while1};
    use nom::character::complete::digit1;
    use nom::combinator::{eof, map};
    use nom::sequence::{preceded, terminated, tuple};
    use nom::IResult;

    use super::*;

    pub fn command<'a>() -> impl FnMut(&'a str) -> IResult<&'a str, Command<'a>> {
        terminated(alt((settings(), update(), action())), eof)
    }

    fn settings<'a>() -> impl FnMut(&'a str) -> IResult<&'a str, Command<'a>> {
        // your_botid has to come before your_bot, the latter tag is a prefix of the former
        let known = alt((
            preceded(tag("timebank "), map(int, Setting::TimeBank)),
            preceded(tag("time_per_move "), map(int, Setting::TimePerMove)),
            preceded(tag("player_names "), map(take_while(|_| true), Setting::PlayerNames)),
            preceded(tag("your_botid "), map(int, |id| Setting::YourBotId(PlayerId(id)))),
            preceded(tag("your_bot "), map(take_while(|_| true), Setting::YourBot)),
            preceded(tag("field_width "), map(int, Setting::FieldWidth)),
            preceded(tag("field_height "), map(int, Setting::FieldHeight)),
            preceded(tag("max_rounds "), map(int, Setting::MaxRounds)),
        ));

        let other = map(
            tuple((word, tag(" "), take_while(|_| true))),
            |(key, _, value)| Setting::Other { key, value },
        );

        preceded(tag("settings "), map(alt((known, other)), Command::Settings))
    }

    fn update<'a>() -> impl FnMut(&'a str) -> IResult<&'a str, Command<'a>> {
        let game = preceded(
            tag("game "),
            alt((
                preceded(tag("round "), map(int, Update::GameRound)),
                preceded(tag("field "), map(take_while(|_| true), Update::GameField)),
            )),
        );

        let living_cells = map(
            tuple((word, tag(" living_cells "), int)),
            |(player, _, count)| Update::LivingCells { player, count },
        );

        let other = map(
            tuple((word, tag(" "), word, tag(" "), take_while(|_| true))),
            |(target, _, key, _, value)| Update::Other { target, key, value },
        );

        preceded(
            tag("update "),
            map(alt((game, living_cells, other)), Command::Update),
        )
    }

    fn action<'a>() -> impl FnMut(&'a str) -> IResult<&'a str, Command<'a>> {
        preceded(
            tag("action move "),
            map(int, |timebank_ms| Command::ActionMove { timebank_ms }),
        )
    }

    fn int<T: FromStr>(input: &str) -> IResult<&str, T>
    where
        T::Err: Debug,
    {
        map(digit1, |s: &str| s.parse().unwrap())(input)
    }

    fn word(input: &str) -> IResult<&str, &str> {
        take_while1(|c: char| c != ' ')(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings() {
        assert_eq!(
            Ok(Command::Settings(Setting::TimeBank(10000))),
            Command::parse("settings timebank 10000")
        );
        assert_eq!(
            Ok(Command::Settings(Setting::TimePerMove(100))),
            Command::parse("settings time_per_move 100")
        );
        assert_eq!(
            Ok(Command::Settings(Setting::PlayerNames("player0,player1"))),
            Command::parse("settings player_names player0,player1")
        );
        assert_eq!(
            Ok(Command::Settings(Setting::YourBot("player1"))),
            Command::parse("settings your_bot player1")
        );
        assert_eq!(
            Ok(Command::Settings(Setting::YourBotId(PlayerId(1)))),
            Command::parse("settings your_botid 1")
        );
        assert_eq!(
            Ok(Command::Settings(Setting::FieldWidth(18))),
            Command::parse("settings field_width 18")
        );
        assert_eq!(
            Ok(Command::Settings(Setting::FieldHeight(16))),
            Command::parse("settings field_height 16")
        );
        assert_eq!(
            Ok(Command::Settings(Setting::MaxRounds(50))),
            Command::parse("settings max_rounds 50")
        );
    }

    #[test]
    fn settings_unknown_key() {
        assert_eq!(
            Ok(Command::Settings(Setting::Other {
                key: "initial_stack",
                value: "2000 chips",
            })),
            Command::parse("settings initial_stack 2000 chips")
        );
    }

    #[test]
    fn updates() {
        assert_eq!(
            Ok(Command::Update(Update::GameRound(7))),
            Command::parse("update game round 7")
        );
        assert_eq!(
            Ok(Command::Update(Update::GameField(".,.,0,1,."))),
            Command::parse("update game field .,.,0,1,.")
        );
        assert_eq!(
            Ok(Command::Update(Update::LivingCells {
                player: "player0",
                count: 40,
            })),
            Command::parse("update player0 living_cells 40")
        );
    }

    #[test]
    fn update_unknown_key() {
        assert_eq!(
            Ok(Command::Update(Update::Other {
                target: "player1",
                key: "move",
                value: "kill 1,2",
            })),
            Command::parse("update player1 move kill 1,2")
        );
    }

    #[test]
    fn action() {
        assert_eq!(
            Ok(Command::ActionMove { timebank_ms: 9384 }),
            Command::parse("action move 9384")
        );
    }

    #[test]
    fn garbage() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("derp").is_err());
        assert!(Command::parse("settings").is_err());
        assert!(Command::parse("update game").is_err());
        assert!(Command::parse("action move").is_err());
        assert!(Command::parse("action move 100 extra").is_err());
    }
}
