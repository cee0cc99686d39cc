//! Team victory by reaching an exit tile.

use super::{Combatant, ExitTile, Outcome, Progression, Terrain};

/// Advances the whole roster as soon as any warrior stands on an exit.
///
/// Decision order:
/// 1. Any warrior on an exit tile: [`Outcome::Advance`] with the entire
///    roster, dead warriors included.
/// 2. Nobody alive (an empty roster counts): [`Outcome::GameOver`].
/// 3. Otherwise [`Outcome::Undecided`].
///
/// The exit check runs first, so a last survivor who dies on the exit still
/// carries the team forward. The history is not consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReachExit;

impl<W, M, H> Progression<W, M, H> for ReachExit
where
    W: Combatant + Clone,
    M: Terrain<W>,
{
    fn evaluate(&self, roster: &[W], map: &M, _history: &H) -> Outcome<W> {
        let anyone_reached_exit = roster.iter().any(|warrior| map.look_down(warrior).is_exit());
        if anyone_reached_exit {
            return Outcome::Advance(roster.to_vec());
        }

        let all_dead = !roster.iter().any(Combatant::is_alive);
        if all_dead {
            Outcome::GameOver
        } else {
            Outcome::Undecided
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coord, History, Map, Warrior};

    /// Minimal collaborators so the rule can be checked without the game layer.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Token {
        alive: bool,
        on_exit: bool,
    }

    impl Combatant for Token {
        fn is_alive(&self) -> bool {
            self.alive
        }
    }

    struct Ground(bool);

    impl ExitTile for Ground {
        fn is_exit(&self) -> bool {
            self.0
        }
    }

    struct Board;

    impl Terrain<Token> for Board {
        type Tile = Ground;

        fn look_down(&self, warrior: &Token) -> Ground {
            Ground(warrior.on_exit)
        }
    }

    fn token(alive: bool, on_exit: bool) -> Token {
        Token { alive, on_exit }
    }

    fn eval(roster: &[Token]) -> Outcome<Token> {
        ReachExit.evaluate(roster, &Board, &())
    }

    #[test]
    fn test_exit_advances_full_roster() {
        let roster = vec![token(true, true), token(false, false)];
        assert_eq!(eval(&roster), Outcome::Advance(roster.clone()));
    }

    #[test]
    fn test_exit_beats_all_dead() {
        let roster = vec![token(false, true), token(false, false)];
        assert_eq!(eval(&roster), Outcome::Advance(roster.clone()));
    }

    #[test]
    fn test_all_dead_is_game_over() {
        let roster = vec![token(false, false), token(false, false)];
        assert_eq!(eval(&roster), Outcome::GameOver);
    }

    #[test]
    fn test_empty_roster_is_game_over() {
        assert_eq!(eval(&[]), Outcome::GameOver);
    }

    #[test]
    fn test_living_warrior_off_exit_is_undecided() {
        let roster = vec![token(false, false), token(true, false)];
        assert_eq!(eval(&roster), Outcome::Undecided);
    }

    #[test]
    fn test_roster_order_preserved() {
        let roster = vec![token(true, false), token(false, false), token(true, true)];
        let advancing = eval(&roster).into_advancing().unwrap();
        assert_eq!(advancing, roster);
    }

    #[test]
    fn test_with_game_map() {
        let map = Map::from_ascii(&["#####", "#..>#", "#####"]).unwrap();
        let mut fallen = Warrior::new(2, "Birch", Coord::new(1, 1));
        fallen.take_damage(u32::MAX);
        let mut roster = vec![Warrior::new(1, "Ash", Coord::new(2, 1)), fallen];
        let history = History::new();

        assert_eq!(ReachExit.evaluate(&roster, &map, &history), Outcome::Undecided);

        roster[0].move_to(Coord::new(3, 1));
        assert_eq!(
            ReachExit.evaluate(&roster, &map, &history),
            Outcome::Advance(roster.clone())
        );
    }

    #[test]
    fn test_off_map_warrior_is_not_on_exit() {
        let map = Map::from_ascii(&[">"]).unwrap();
        let roster = vec![Warrior::new(1, "Ash", Coord::new(9, 9))];
        assert_eq!(
            ReachExit.evaluate(&roster, &map, &History::new()),
            Outcome::Undecided
        );
    }
}
