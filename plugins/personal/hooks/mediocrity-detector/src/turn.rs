use hook_common::Record;

/// Records of the current turn: everything from the last prompt the user typed.
/// User records carrying tool results do not start a turn. Without any prompt
/// the whole transcript is one turn.
pub fn current_turn(records: &[Record]) -> &[Record] {
    let start = records
        .iter()
        .rposition(Record::is_user_prompt)
        .unwrap_or(0);
    &records[start..]
}
