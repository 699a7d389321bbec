//! Human-readable messages for dispatched actions.
use scoring_core::{Action, ActionResult, MatchState, Side};

use crate::message::{MessageEntry, MessageLevel};
use crate::session::SessionEvent;
use crate::view_model::display_name;

/// Formats a dispatch into log entries, primary message first.
///
/// `state` is the state *after* the dispatch. Actions that changed nothing
/// produce no entries.
pub fn format_event(event: &SessionEvent, state: &MatchState) -> Vec<MessageEntry> {
    if event.outcome.delta.is_empty() {
        return Vec::new();
    }

    let stamp = Some(event.sequence);
    let info = |text: String| MessageEntry::new(text, stamp, MessageLevel::Info);
    let name = |side: Side| display_name(state.player(side), side);

    let mut entries = vec![info(format_action(&event.action, state))];

    if let ActionResult::Point(point) = event.outcome.action_result {
        if let Some(server) = point.server_after.filter(|_| point.serve_changed()) {
            entries.push(info(format!("Service to {}", name(server))));
        }
        if let Some(winner) = point.game_won {
            entries.push(MessageEntry::new(
                format!(
                    "{} wins the game (games {}-{})",
                    name(winner),
                    state.player_a.games,
                    state.player_b.games
                ),
                stamp,
                MessageLevel::Highlight,
            ));
        }
    }

    entries
}

fn format_action(action: &Action, state: &MatchState) -> String {
    match action.side() {
        Some(side) => format_side_action(action, side, state),
        None => format_match_action(action, state),
    }
}

fn format_side_action(action: &Action, side: Side, state: &MatchState) -> String {
    let player = state.player(side);
    let name = display_name(player, side);

    match action {
        Action::AwardPoint(_) => {
            let score = format!("{}-{}", state.player_a.points, state.player_b.points);
            format!("Point to {name} ({score})")
        }
        Action::CorrectPoint(_) => format!("{name} points corrected to {}", player.points),
        Action::AwardGame(_) => format!("Game to {name} ({} games)", player.games),
        Action::CorrectGame(_) => format!("{name} games corrected to {}", player.games),
        Action::SetName(set) => {
            if set.name.trim().is_empty() {
                format!("Side {side} name cleared")
            } else {
                format!("Side {side} is now {}", set.name.trim())
            }
        }
        Action::SetService(_) => match state.server() {
            Some(server) => format!("{} to serve", display_name(state.player(server), server)),
            None => String::from("Service cleared"),
        },
        Action::ChangeEnds(_) | Action::ResetPoints(_) | Action::ResetAll(_) => {
            format_match_action(action, state)
        }
    }
}

fn format_match_action(action: &Action, state: &MatchState) -> String {
    let name = |side: Side| display_name(state.player(side), side);

    match action {
        Action::ChangeEnds(_) => format!("Ends changed: {} vs {}", name(Side::A), name(Side::B)),
        Action::ResetPoints(_) => String::from("Points reset"),
        _ => String::from("Match reset"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MatchSession;

    fn texts(entries: &[MessageEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.text.as_str()).collect()
    }

    #[test]
    fn point_reports_score_and_service_change() {
        let mut session = MatchSession::default();
        session.dispatch(Action::set_name(Side::B, "Fan"));
        session.dispatch(Action::set_service(Side::A, true));
        session.dispatch(Action::award_point(Side::A));

        let event = session.dispatch(Action::award_point(Side::B));
        let entries = format_event(&event, session.state());

        assert_eq!(texts(&entries), ["Point to Fan (1-1)", "Service to Fan"]);
        assert!(entries.iter().all(|entry| entry.sequence == Some(4)));
    }

    #[test]
    fn winning_point_is_highlighted() {
        let mut state = MatchState::with_names("Ma", "");
        state.player_a.points = 10;
        let mut session = MatchSession::with_state(state, Default::default());

        let event = session.dispatch(Action::award_point(Side::A));
        let entries = format_event(&event, session.state());

        let last = entries.last().expect("win entry");
        assert_eq!(last.text, "Ma wins the game (games 1-0)");
        assert_eq!(last.level, MessageLevel::Highlight);
    }

    #[test]
    fn no_op_dispatch_is_silent() {
        let mut session = MatchSession::default();
        let event = session.dispatch(Action::reset_points());

        assert!(format_event(&event, session.state()).is_empty());
    }

    #[test]
    fn change_ends_names_the_new_sides() {
        let mut session =
            MatchSession::with_state(MatchState::with_names("X", "Y"), Default::default());
        let event = session.dispatch(Action::change_ends());

        assert_eq!(
            texts(&format_event(&event, session.state())),
            ["Ends changed: Y vs X"]
        );
    }

    #[test]
    fn side_actions_name_the_targeted_player() {
        let mut session =
            MatchSession::with_state(MatchState::with_names("Ma", "Fan"), Default::default());

        let corrected = session.dispatch(Action::correct_point(Side::B));
        let renamed = session.dispatch(Action::set_name(Side::A, "  Xu  "));
        let served = session.dispatch(Action::set_service(Side::A, true));

        assert_eq!(
            texts(&format_event(&corrected, session.state())),
            ["Fan points corrected to -2"]
        );
        assert_eq!(
            texts(&format_event(&renamed, session.state())),
            ["Side A is now Xu"]
        );
        assert_eq!(
            texts(&format_event(&served, session.state())),
            ["Xu to serve"]
        );
    }
}
