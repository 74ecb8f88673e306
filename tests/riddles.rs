use golad_bot::board::{Board, PlayerId, Settings};
use golad_bot::interface::riddles::client;
use golad_bot::mv::Move;
use golad_bot::strategy::RandomStrategy;
use golad_bot::util::consistent_rng;

fn run_session(input: &str) -> (String, String) {
    let strategy = RandomStrategy::new(consistent_rng());

    let mut output = Vec::new();
    let mut log = Vec::new();
    client::run(strategy, input.as_bytes(), &mut output, &mut log).unwrap();

    (String::from_utf8(output).unwrap(), String::from_utf8(log).unwrap())
}

#[test]
fn session_produces_one_move() {
    let input = [
        "settings player_names player0,player1",
        "settings your_bot player0",
        "settings your_botid 0",
        "settings timebank 10000",
        "settings time_per_move 100",
        "settings field_width 3",
        "settings field_height 2",
        "settings max_rounds 25",
        "update game round 1",
        "update game field 0,0,.,1,.,.",
        "update player0 living_cells 2",
        "update player1 living_cells 1",
        "action move 10000",
    ]
    .join("\n");

    let (output, log) = run_session(&input);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(1, lines.len(), "expected exactly one move line, log:\n{}", log);

    // whatever was submitted has to be playable on the last field
    let mv = Move::from_command(lines[0]).unwrap();
    let settings = Settings::new(3, 2, PlayerId(0));
    let board = Board::from_field_str(settings, "0,0,.,1,.,.").unwrap();
    assert!(board.is_available_move(mv));
}

#[test]
fn empty_board_session_passes() {
    let input = [
        "settings your_botid 1",
        "settings field_width 2",
        "settings field_height 1",
        "update game round 0",
        "update game field .,.",
        "action move 500",
    ]
    .join("\n");

    let (output, log) = run_session(&input);
    assert_eq!("pass\n", output);

    assert!(log.contains("> update game field .,."));
    assert!(log.contains("< pass"));
}

#[test]
fn action_without_board_is_survivable() {
    let (output, log) = run_session("action move 10000");

    assert_eq!("", output);
    assert!(log.contains("without having a board"));
}

#[test]
fn field_before_settings_is_survivable() {
    let input = [
        "update game field .,.",
        "settings your_botid 0",
        "settings field_width 2",
        "settings field_height 1",
        "update game field .,.",
        "action move 100",
    ]
    .join("\n");

    let (output, log) = run_session(&input);
    assert_eq!("pass\n", output);
    assert!(log.contains("settings are incomplete"));
}

#[test]
fn malformed_field_is_survivable() {
    let input = [
        "settings your_botid 0",
        "settings field_width 2",
        "settings field_height 1",
        "update game field .,.,.",
        "update game field x,.",
        "update game field 0,.",
        "action move 100",
    ]
    .join("\n");

    let (output, log) = run_session(&input);
    assert_eq!(1, output.lines().count());
    assert!(log.contains("invalid field string"));
}

#[test]
fn unknown_lines_are_skipped() {
    let input = [
        "settings your_botid 0",
        "settings field_width 2",
        "settings field_height 1",
        "settings some_future_setting whatever",
        "update player0 some_future_key 42",
        "complete nonsense",
        "",
        "update game field 0,.",
        "action move 100",
    ]
    .join("\n");

    let (output, log) = run_session(&input);
    assert_eq!(1, output.lines().count(), "log:\n{}", log);
    assert!(log.contains("failed to parse command 'complete nonsense'"));
    assert!(log.contains("ignoring unknown setting"));
    assert!(log.contains("ignoring unknown update"));
}
