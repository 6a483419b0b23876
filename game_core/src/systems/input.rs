use crate::{Paddle, PaddleIntent, PlayerInput, Side};
use hecs::World;

/// Translate the frame's sampled key state into the human paddle's intent
pub fn apply_input(world: &mut World, input: PlayerInput) {
    let dir = input.dir();
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Left {
            intent.dir = dir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_player_paddle, Config};

    #[test]
    fn test_input_sets_left_paddle_intent() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_player_paddle(&mut world, &config);

        apply_input(&mut world, PlayerInput::new(false, true));
        assert_eq!(world.get::<&PaddleIntent>(entity).unwrap().dir, 1);

        apply_input(&mut world, PlayerInput::new(true, false));
        assert_eq!(world.get::<&PaddleIntent>(entity).unwrap().dir, -1);

        apply_input(&mut world, PlayerInput::new(true, true));
        assert_eq!(
            world.get::<&PaddleIntent>(entity).unwrap().dir,
            0,
            "Opposed keys cancel"
        );
    }
}
