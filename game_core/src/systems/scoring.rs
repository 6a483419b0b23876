use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if the ball passed a bounce plane without being returned. The
/// velocity sign guard keeps a goal from re-triggering on the frame a
/// bounce just reversed the ball past the same plane.
pub fn check_goals(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < config.left_bounce_plane() && ball.vel.x < 0.0 {
            // Human missed
            score.increment_right();
            events.right_scored = true;
            ball.serve(Side::Right, config, rng);
        } else if ball.pos.x > config.right_bounce_plane() && ball.vel.x > 0.0 {
            // Opponent missed
            score.increment_left();
            events.left_scored = true;
            ball.serve(Side::Left, config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup() -> (World, Config, Score, Events, GameRng) {
        (
            World::new(),
            Config::new(),
            Score::new(),
            Events::new(),
            GameRng::new(12345),
        )
    }

    fn set_ball(world: &mut World, pos: Vec2, vel: Vec2) {
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(&mut world, &config);
        set_ball(
            &mut world,
            Vec2::new(config.left_bounce_plane() - 1.0, 350.0),
            Vec2::new(-1.2, 0.0),
        );

        check_goals(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 1, "Opponent should score");
        assert_eq!(score.left, 0);
        assert!(events.right_scored);

        // Serve restarts from center toward the scorer's side
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, config.ball_start());
            assert_eq!(ball.vel.x, config.ball_base_speed);
        }
    }

    #[test]
    fn test_left_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(&mut world, &config);
        set_ball(
            &mut world,
            Vec2::new(config.right_bounce_plane() + 1.0, 350.0),
            Vec2::new(1.2, 0.0),
        );

        check_goals(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1, "Human should score");
        assert_eq!(score.right, 0);
        assert!(events.left_scored);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, config.ball_start());
            assert_eq!(ball.vel.x, -config.ball_base_speed);
        }
    }

    #[test]
    fn test_velocity_sign_guards_the_goal() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(&mut world, &config);
        // Past the left plane but already heading back into play, as after
        // a bounce on the same frame
        set_ball(
            &mut world,
            Vec2::new(config.left_bounce_plane() - 1.0, 350.0),
            Vec2::new(1.2, 0.0),
        );

        check_goals(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
        assert!(!events.left_scored && !events.right_scored);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(&mut world, &config);

        check_goals(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(&mut world, &config);

        for _ in 0..3 {
            set_ball(
                &mut world,
                Vec2::new(config.left_bounce_plane() - 1.0, 350.0),
                Vec2::new(-1.2, 0.0),
            );
            check_goals(&mut world, &config, &mut score, &mut events, &mut rng);
        }

        assert_eq!(score.right, 3);
        assert_eq!(score.left, 0);
    }
}
