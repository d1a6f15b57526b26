mod tests {
    use crate::{
        shapes::{enums::TeamSideEnum, match_state::MatchState},
        tests::at,
    };
    use TeamSideEnum::{A, B};

    /// Plays `points` one second apart, starting after the points already played.
    fn play(state: &mut MatchState, points: &[TeamSideEnum]) -> Vec<Option<TeamSideEnum>> {
        let start = state.timeline.current_set().len() as i64
            + state
                .timeline
                .completed_sets()
                .map(|s| s.len() as i64)
                .sum::<i64>();
        points
            .iter()
            .enumerate()
            .map(|(i, team)| state.score_point(*team, at(start + i as i64)))
            .collect()
    }

    fn assert_initial(state: &MatchState) {
        assert_eq!(state.score_a, 0, "wrong score_a");
        assert_eq!(state.score_b, 0, "wrong score_b");
        assert_eq!(state.sets_won_a, 0, "wrong sets_won_a");
        assert_eq!(state.sets_won_b, 0, "wrong sets_won_b");
        assert_eq!(state.server, A, "wrong server");
        assert_eq!(state.total_points_this_set, 0, "wrong total points");
        assert!(state.timeline.current_set().is_empty(), "current set not empty");
        assert_eq!(state.timeline.completed_set_count(), 0, "history not empty");
    }

    #[test]
    fn new_match_is_empty_and_served_by_a() {
        assert_initial(&MatchState::new());
    }

    #[test]
    fn timeline_length_tracks_the_score() {
        let mut state = MatchState::new();
        // deterministic but irregular sequence
        let mut seed: u32 = 7;
        for i in 0..300 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let team = if (seed >> 16) % 3 == 0 { B } else { A };
            state.score_point(team, at(i));
            assert_eq!(
                state.timeline.current_set().len() as u32,
                state.score_a + state.score_b,
                "timeline and score disagree after point {}",
                i + 1
            );
            assert_eq!(
                state.total_points_this_set,
                state.score_a + state.score_b,
                "wrong points count after point {}",
                i + 1
            );
        }
        assert!(state.sets_won_a > 0);
    }

    #[test]
    fn server_flips_every_second_point_whoever_scores() {
        let mut state = MatchState::new();
        let mut servers = vec![];
        for (i, team) in [A, A, B, B, B, A, A].into_iter().enumerate() {
            state.score_point(team, at(i as i64));
            servers.push(state.server);
        }
        assert_eq!(servers, vec![A, B, B, A, A, B, B]);
    }

    #[test]
    fn alternating_points_rotate_after_two_four_and_six() {
        let mut state = MatchState::new();
        let mut servers = vec![state.server];
        for (i, team) in [A, B, A, B, A, B].into_iter().enumerate() {
            state.score_point(team, at(i as i64));
            servers.push(state.server);
        }
        assert_eq!(servers, vec![A, A, B, B, A, A, B]);
        assert_eq!(state.server, A.opponent());
    }

    #[test]
    fn set_is_not_closed_at_eleven_ten() {
        let mut state = MatchState::new();
        let mut points = vec![];
        for _ in 0..10 {
            points.push(A);
            points.push(B);
        }
        points.push(A);
        let winners = play(&mut state, &points);
        assert!(winners.iter().all(Option::is_none));
        assert_eq!((state.score_a, state.score_b), (11, 10));
        assert_eq!(state.timeline.completed_set_count(), 0);
        assert_eq!(state.get_set_winner(), None);
    }

    #[test]
    fn set_is_closed_at_eleven_with_a_two_points_lead() {
        let mut state = MatchState::new();
        let mut points = vec![B; 9];
        points.extend([A; 11]);
        let winners = play(&mut state, &points);
        assert_eq!(winners.last(), Some(&Some(A)));
        assert!(winners[..winners.len() - 1].iter().all(Option::is_none));
        assert_eq!((state.score_a, state.score_b), (0, 0));
        assert_eq!((state.sets_won_a, state.sets_won_b), (1, 0));
    }

    #[test]
    fn b_reaching_eleven_against_nine_archives_the_whole_set() {
        let mut state = MatchState::new();
        let mut points = vec![];
        for _ in 0..9 {
            points.push(A);
            points.push(B);
        }
        points.extend([B, B]);
        let winners = play(&mut state, &points);
        assert_eq!(winners.last(), Some(&Some(B)));
        assert_eq!(state.sets_won_b, 1);
        assert_eq!(state.sets_won_a, 0);
        assert_eq!((state.score_a, state.score_b), (0, 0));
        assert_eq!(state.total_points_this_set, 0);
        assert!(state.timeline.current_set().is_empty());
        let history: Vec<_> = state.timeline.completed_sets().collect();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].len(), 20);
        let last = history[0].last().expect("expected a point");
        assert_eq!((last.team, last.score_after), (B, 11));
    }

    #[test]
    fn sixteen_points_set_keeps_sixteen_records() {
        let mut state = MatchState::new();
        let points = [B, A, B, A, B, A, B, A, B, A, B, B, B, B, B, B];
        let winners = play(&mut state, &points);
        assert_eq!(winners.last(), Some(&Some(B)));
        assert_eq!((state.sets_won_a, state.sets_won_b), (0, 1));
        let history: Vec<_> = state.timeline.completed_sets().collect();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].len(), 16);
        assert_eq!(history[0].iter().filter(|p| p.team == A).count(), 5);
    }

    #[test]
    fn deuce_needs_a_two_points_lead() {
        let mut state = MatchState::new();
        let mut points = vec![];
        for _ in 0..10 {
            points.push(A);
            points.push(B);
        }
        play(&mut state, &points);
        assert_eq!((state.score_a, state.score_b), (10, 10));
        assert_eq!(play(&mut state, &[A]), vec![None]);
        assert_eq!((state.score_a, state.score_b), (11, 10));
        assert_eq!(play(&mut state, &[A]), vec![Some(A)]);
        assert_eq!(state.sets_won_a, 1);
        let history: Vec<_> = state.timeline.completed_sets().collect();
        let last = history[0].last().expect("expected a point");
        assert_eq!(last.score_after, 12);
        assert_eq!(
            history[0].iter().filter(|p| p.team == B).count(),
            10,
            "wrong losing score"
        );
    }

    #[test]
    fn deuce_can_go_on_past_twelve() {
        let mut state = MatchState::new();
        let mut points = vec![];
        for _ in 0..10 {
            points.push(A);
            points.push(B);
        }
        play(&mut state, &points);
        let winners = play(&mut state, &[A, B, A, A]);
        assert_eq!(winners, vec![None, None, None, Some(A)]);
        let history: Vec<_> = state.timeline.completed_sets().collect();
        assert_eq!(history[0].len(), 24);
        assert_eq!(history[0].last().map(|p| p.score_after), Some(13));
    }

    #[test]
    fn server_carries_over_into_the_next_set() {
        let mut state = MatchState::new();
        // 11 points: flips after 2, 4, 6, 8, 10
        play(&mut state, &[A; 11]);
        assert_eq!(state.sets_won_a, 1);
        assert_eq!(state.server, B);
        // first point of the new set does not rotate
        play(&mut state, &[A]);
        assert_eq!(state.server, B);
        play(&mut state, &[B]);
        assert_eq!(state.server, A);
    }

    #[test]
    fn rotation_is_checked_before_the_set_reset() {
        let mut state = MatchState::new();
        let mut points = vec![];
        for _ in 0..10 {
            points.push(A);
            points.push(B);
        }
        // 22nd point is even: it rotates, then the set closes
        points.extend([A, A]);
        play(&mut state, &points);
        assert_eq!(state.sets_won_a, 1);
        assert_eq!(state.total_points_this_set, 0);
        assert_eq!(state.server, B);
    }

    #[test]
    fn completed_sets_are_most_recent_first() {
        let mut state = MatchState::new();
        play(&mut state, &[A; 11]);
        play(&mut state, &[B; 11]);
        play(&mut state, &[A, B, A]);
        assert_eq!((state.sets_won_a, state.sets_won_b), (1, 1));
        let history: Vec<_> = state.timeline.completed_sets().collect();
        assert_eq!(history.len(), 2);
        assert!(history[0].iter().all(|p| p.team == B));
        assert!(history[1].iter().all(|p| p.team == A));
        assert_eq!(state.timeline.current_set().len(), 3);
        assert_eq!((state.score_a, state.score_b), (2, 1));
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut state = MatchState::new();
        play(&mut state, &[A; 11]);
        play(&mut state, &[B; 11]);
        play(&mut state, &[B, B, A]);
        assert_eq!(state.server, B);
        state.reset_match();
        assert_initial(&state);
        // and it behaves as a new match
        assert_eq!(play(&mut state, &[A]), vec![None]);
        assert_eq!(state.score_a, 1);
        assert_eq!(state.timeline.current_set().len(), 1);
    }

    #[test]
    fn reset_of_a_new_match_is_a_no_op() {
        let mut state = MatchState::new();
        state.reset_match();
        assert_initial(&state);
    }
}
