//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world by one frame. Step order matters:
//! movement, then pairwise collisions, then cleanup and respawn, then the
//! death check. Pools are only pruned after every collision pass is done.

use super::collision::check_collision;
use super::projectile::ProjectileKind;
use super::state::{SessionPhase, World};
use crate::audio::{AudioSink, SoundCue};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire held
    pub fire: bool,
    /// Leave the session
    pub quit: bool,
    /// Demo mode - the burger plays itself
    pub autopilot: bool,
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, input: &TickInput, dt: f32, audio: &mut impl AudioSink) {
    if world.phase == SessionPhase::Exiting {
        return;
    }
    if input.quit {
        world.phase = SessionPhase::Exiting;
        log::info!(
            "Session exiting after {} frames with score {}",
            world.stats.frames,
            world.score
        );
        return;
    }

    let input = if input.autopilot {
        autopilot_input(world)
    } else {
        input.clone()
    };

    world.stats.frames += 1;

    update_entities(world, &input, dt, audio);
    resolve_bear_collisions(world, audio);
    resolve_burger_bear_collisions(world, audio);
    resolve_burger_projectile_collisions(world, audio);
    resolve_bear_projectile_collisions(world, audio);

    // Clean out inactive bears and replace them
    world.bears.retain(|bear| bear.active);
    world.top_up_bears();

    world.projectiles.retain(|projectile| projectile.active);
    world.explosions.retain(|explosion| !explosion.finished());

    check_burger_kill(world, audio);
}

/// Burger input, then bears, projectiles and explosions
fn update_entities(world: &mut World, input: &TickInput, dt: f32, audio: &mut impl AudioSink) {
    if let Some(spawn) = world.burger.update(dt, input, &world.arena, &world.config) {
        world.enqueue_projectile(spawn);
        world.stats.shots_fired += 1;
        audio.play(SoundCue::BurgerShot);
    }

    let mut bear_shots = Vec::new();
    for bear in world.bears.iter_mut() {
        if let Some(spawn) = bear.update(dt, world.config.teddy_bear_projectile_offset) {
            bear.rearm(world.spawner.next_fire_delay(&world.config));
            bear_shots.push(spawn);
        }
    }
    for spawn in bear_shots {
        world.enqueue_projectile(spawn);
        world.stats.bear_shots_fired += 1;
        audio.play(SoundCue::TeddyShot);
    }

    let arena_height = world.config.arena_height;
    for projectile in world.projectiles.iter_mut() {
        projectile.update(dt, arena_height);
    }
    for explosion in world.explosions.iter_mut() {
        explosion.update(dt);
    }
}

/// Bounce bears off each other; retire bears about to leave the arena
///
/// Every ordered pair is checked, so later pairs see the rectangles already
/// moved by earlier ones. With three or more bears piled up this is an
/// approximation.
fn resolve_bear_collisions(world: &mut World, audio: &mut impl AudioSink) {
    let lookahead = world.config.collision_lookahead;
    let (width, height) = (world.config.arena_width, world.config.arena_height);
    let count = world.bears.len();

    for i in 0..count {
        for j in 0..count {
            if i == j || !world.bears[i].active || !world.bears[j].active {
                continue;
            }
            let Some(result) = check_collision(
                lookahead,
                width,
                height,
                world.bears[i].body(),
                world.bears[j].body(),
            ) else {
                continue;
            };

            audio.play(SoundCue::TeddyBounce);
            if result.first_out_of_bounds {
                world.bears[i].active = false;
            } else {
                world.bears[i].apply_body(result.first);
            }
            if result.second_out_of_bounds {
                world.bears[j].active = false;
            } else {
                world.bears[j].apply_body(result.second);
            }
        }
    }

    // Strays that no pair check caught (e.g. a lone bear)
    for bear in world.bears.iter_mut() {
        if bear.active && !world.arena.intersects(&bear.rect) {
            bear.active = false;
        }
    }
}

/// Bears that touch the burger hurt it and explode
fn resolve_burger_bear_collisions(world: &mut World, audio: &mut impl AudioSink) {
    let burger_rect = world.burger.rect();
    let mut blasts = Vec::new();

    for bear in world.bears.iter_mut().filter(|bear| bear.active) {
        if !bear.rect.intersects(&burger_rect) {
            continue;
        }
        if !world.burger_dead {
            audio.play(SoundCue::BurgerDamage);
        }
        world.burger.take_damage(world.config.bear_damage);
        bear.active = false;
        world.stats.bears_rammed += 1;
        log::debug!(
            "Bear rammed the burger, health now {}",
            world.burger.health()
        );
        blasts.push(bear.location());
        audio.play(SoundCue::Explosion);
    }

    for center in blasts {
        world.spawn_explosion(center);
    }
}

/// Any projectile touching the burger hurts it, whoever fired it
fn resolve_burger_projectile_collisions(world: &mut World, audio: &mut impl AudioSink) {
    let burger_rect = world.burger.rect();

    for projectile in world.projectiles.iter_mut().filter(|p| p.active) {
        if !projectile.rect.intersects(&burger_rect) {
            continue;
        }
        if !world.burger_dead {
            audio.play(SoundCue::BurgerDamage);
        }
        projectile.active = false;
        world.burger.take_damage(projectile.damage());
    }
}

/// French fries destroy bears and score points
fn resolve_bear_projectile_collisions(world: &mut World, audio: &mut impl AudioSink) {
    let mut blasts = Vec::new();

    for bear in world.bears.iter_mut() {
        for projectile in world.projectiles.iter_mut() {
            if !bear.active {
                break;
            }
            if !projectile.active || !projectile.kind().hurts_bears() {
                continue;
            }
            if bear.rect.intersects(&projectile.rect) {
                world.score += world.config.bear_points;
                world.stats.bears_shot += 1;
                log::debug!("Bear shot down, score now {}", world.score);
                bear.active = false;
                projectile.active = false;
                blasts.push(bear.location());
                audio.play(SoundCue::Explosion);
            }
        }
    }

    for center in blasts {
        world.spawn_explosion(center);
    }
}

/// One death explosion and cue, the first time health reaches zero
fn check_burger_kill(world: &mut World, audio: &mut impl AudioSink) {
    if world.burger.is_alive() || world.burger_dead {
        return;
    }
    world.burger_dead = true;
    if world.phase == SessionPhase::Running {
        world.phase = SessionPhase::PlayerDead;
    }
    world.spawn_explosion(world.burger.center());
    audio.play(SoundCue::BurgerDeath);
    log::info!(
        "Burger destroyed on frame {} with score {}",
        world.stats.frames,
        world.score
    );
}

/// Demo mode input: line up under the nearest bear and fire
pub fn autopilot_input(world: &World) -> TickInput {
    let mut input = TickInput {
        down: true,
        ..Default::default()
    };
    if !world.burger.is_alive() {
        return input;
    }

    let burger = world.burger.center();

    // Sidestep a teddy bear shot coming straight down
    let incoming = world.projectiles.iter().find(|p| {
        p.active
            && p.kind() == ProjectileKind::EnemyShot
            && p.rect.bottom() <= world.burger.rect().top()
            && (p.rect.center().x - burger.x).abs() < world.sizes.burger.x
    });
    if let Some(shot) = incoming {
        if shot.rect.center().x < burger.x {
            input.right = true;
        } else {
            input.left = true;
        }
        return input;
    }

    let target = world
        .bears
        .iter()
        .filter(|bear| bear.active)
        .min_by(|a, b| {
            a.location()
                .distance_squared(burger)
                .partial_cmp(&b.location().distance_squared(burger))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(bear) = target {
        let dx = bear.location().x - burger.x;
        let deadzone = world.sizes.burger.x / 4.0;
        if dx < -deadzone {
            input.left = true;
        } else if dx > deadzone {
            input.right = true;
        }
        input.fire = dx.abs() < world.sizes.bear.x;
    }

    input
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::audio::CueRecorder;
    use crate::config::GameConfig;
    use crate::consts::SIM_DT;
    use crate::content::SpriteCatalog;
    use crate::sim::bear::TeddyBear;
    use crate::sim::collision::is_collision_free;
    use crate::sim::projectile::Projectile;
    use crate::sim::rect::Rect;

    /// No bears, no enemy fire, no respawning
    fn quiet_world() -> World {
        let config = GameConfig {
            max_bears: 0,
            bears_fire: false,
            ..Default::default()
        };
        World::empty(config, &SpriteCatalog::default(), 7)
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    fn enemy_shot_on_burger(world: &World) -> Projectile {
        Projectile::new(
            ProjectileKind::EnemyShot,
            Rect::centered_at(world.burger.center(), Vec2::splat(12.0)),
            &world.config,
        )
    }

    #[test]
    fn test_enemy_shot_damages_burger() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        world.projectiles.push(enemy_shot_on_burger(&world));

        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert_eq!(world.burger.health(), 90);
        assert!(world.explosions.is_empty());
        assert!(world.projectiles.is_empty());
        assert_eq!(audio.count(SoundCue::BurgerDamage), 1);
        assert_eq!(audio.count(SoundCue::BurgerDeath), 0);
        assert_eq!(world.phase, SessionPhase::Running);
    }

    #[test]
    fn test_french_fries_destroy_bear() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        let bear = TeddyBear::new(Rect::new(300.0, 200.0, 40.0, 48.0), Vec2::ZERO);
        let location = bear.location();
        world.bears.push(bear);
        world.projectiles.push(Projectile::new(
            ProjectileKind::PlayerShot,
            Rect::centered_at(location, Vec2::new(8.0, 24.0)),
            &world.config,
        ));

        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert!(world.bears.is_empty());
        assert!(world.projectiles.is_empty());
        assert_eq!(world.score, world.config.bear_points);
        assert_eq!(world.explosions.len(), 1);
        assert_eq!(world.explosions[0].location(), location);
        assert_eq!(audio.count(SoundCue::Explosion), 1);
    }

    #[test]
    fn test_two_fries_on_one_bear_score_once() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        let bear = TeddyBear::new(Rect::new(300.0, 200.0, 40.0, 48.0), Vec2::ZERO);
        let location = bear.location();
        world.bears.push(bear);
        for dx in [-6.0, 6.0] {
            world.projectiles.push(Projectile::new(
                ProjectileKind::PlayerShot,
                Rect::centered_at(location + Vec2::new(dx, 0.0), Vec2::new(8.0, 24.0)),
                &world.config,
            ));
        }

        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert_eq!(world.score, world.config.bear_points);
        assert_eq!(world.explosions.len(), 1);
        // The second fry flies on
        assert_eq!(world.projectiles.len(), 1);
    }

    #[test]
    fn test_enemy_shot_does_not_hurt_bear() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        let bear = TeddyBear::new(Rect::new(300.0, 200.0, 40.0, 48.0), Vec2::ZERO);
        world.projectiles.push(Projectile::new(
            ProjectileKind::EnemyShot,
            Rect::centered_at(bear.location(), Vec2::splat(12.0)),
            &world.config,
        ));
        world.bears.push(bear);

        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert_eq!(world.bears.len(), 1);
        assert_eq!(world.score, 0);
        assert!(world.explosions.is_empty());
    }

    #[test]
    fn test_bears_bounce_apart() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        world.bears.push(TeddyBear::new(
            Rect::new(100.0, 100.0, 40.0, 48.0),
            Vec2::new(120.0, 0.0),
        ));
        world.bears.push(TeddyBear::new(
            Rect::new(146.0, 100.0, 40.0, 48.0),
            Vec2::new(-120.0, 0.0),
        ));

        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert_eq!(world.bears.len(), 2);
        assert!(world.bears.iter().all(|bear| bear.active));
        assert_eq!(world.bears[0].velocity, Vec2::new(-120.0, 0.0));
        assert_eq!(world.bears[1].velocity, Vec2::new(120.0, 0.0));
        assert!(!world.bears[0].rect.intersects(&world.bears[1].rect));
        assert_eq!(audio.count(SoundCue::TeddyBounce), 1);
    }

    #[test]
    fn test_bounced_bears_never_overlap_afterwards() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        world.bears.push(TeddyBear::new(
            Rect::new(200.0, 200.0, 40.0, 48.0),
            Vec2::new(150.0, 20.0),
        ));
        world.bears.push(TeddyBear::new(
            Rect::new(400.0, 210.0, 40.0, 48.0),
            Vec2::new(-150.0, 0.0),
        ));

        for _ in 0..240 {
            tick(&mut world, &idle(), SIM_DT, &mut audio);
            if world.bears.len() == 2 {
                assert!(!world.bears[0].rect.intersects(&world.bears[1].rect));
            }
        }
        assert!(audio.count(SoundCue::TeddyBounce) >= 1);
    }

    #[test]
    fn test_bears_closing_vertically_bounce_on_y() {
        // Slight x overlap, head-on in y
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        world.bears.push(TeddyBear::new(
            Rect::new(100.0, 100.0, 40.0, 48.0),
            Vec2::new(0.0, 300.0),
        ));
        world.bears.push(TeddyBear::new(
            Rect::new(138.0, 170.0, 40.0, 48.0),
            Vec2::new(0.0, -300.0),
        ));

        for _ in 0..15 {
            tick(&mut world, &idle(), SIM_DT, &mut audio);
            assert_eq!(world.bears.len(), 2);
            assert!(!world.bears[0].rect.intersects(&world.bears[1].rect));
        }
        assert_eq!(audio.count(SoundCue::TeddyBounce), 1);
        assert_eq!(world.bears[0].velocity, Vec2::new(0.0, -300.0));
        assert_eq!(world.bears[1].velocity, Vec2::new(0.0, 300.0));
        assert!(world.bears[0].rect.bottom() < world.bears[1].rect.top());
    }

    #[test]
    fn test_bear_leaving_arena_is_removed() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        world.bears.push(TeddyBear::new(
            Rect::new(1.0, 100.0, 40.0, 48.0),
            Vec2::new(-120.0, 0.0),
        ));
        world.bears.push(TeddyBear::new(
            Rect::new(400.0, 100.0, 40.0, 48.0),
            Vec2::ZERO,
        ));

        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert_eq!(world.bears.len(), 1);
        assert_eq!(world.bears[0].rect.x, 400.0);
        // Any collision result bounces, even one that retires a bear
        assert_eq!(audio.count(SoundCue::TeddyBounce), 1);
    }

    #[test]
    fn test_lone_bear_outside_arena_is_removed() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        world.bears.push(TeddyBear::new(
            Rect::new(-100.0, 100.0, 40.0, 48.0),
            Vec2::new(-10.0, 0.0),
        ));

        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert!(world.bears.is_empty());
    }

    #[test]
    fn test_each_ramming_bear_damages_burger() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        let burger = world.burger.rect();
        for x in [burger.left() - 20.0, burger.right() - 20.0] {
            world.bears.push(TeddyBear::new(
                Rect::new(x, burger.top() - 10.0, 40.0, 48.0),
                Vec2::ZERO,
            ));
        }

        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert_eq!(world.burger.health(), 80);
        assert!(world.bears.is_empty());
        assert_eq!(world.explosions.len(), 2);
        assert_eq!(audio.count(SoundCue::BurgerDamage), 2);
        assert_eq!(audio.count(SoundCue::Explosion), 2);
        assert_eq!(world.stats.bears_rammed, 2);
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_population_is_replenished() {
        let config = GameConfig {
            bears_fire: false,
            ..Default::default()
        };
        let mut world = World::new(config, &SpriteCatalog::default(), 21);
        let mut audio = CueRecorder::new();
        for bear in world.bears.iter_mut() {
            bear.active = false;
        }

        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert_eq!(world.bears.len(), world.config.max_bears);
        assert!(world.bears.iter().all(|bear| bear.active));
        assert_eq!(world.stats.bears_spawned as usize, 2 * world.config.max_bears);
        for (i, bear) in world.bears.iter().enumerate() {
            let mut others = vec![world.burger.rect()];
            others.extend(world.projectiles.iter().map(|p| p.rect));
            others.extend(
                world
                    .bears
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, b)| b.rect),
            );
            assert!(is_collision_free(&bear.rect, &others));
        }
    }

    #[test]
    fn test_death_is_handled_once() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        world.burger.set_health(5);
        world.projectiles.push(enemy_shot_on_burger(&world));

        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert_eq!(world.burger.health(), 0);
        assert_eq!(world.phase, SessionPhase::PlayerDead);
        assert!(world.is_burger_dead());
        assert_eq!(world.explosions.len(), 1);
        assert_eq!(world.explosions[0].location(), world.burger.center());
        assert_eq!(audio.count(SoundCue::BurgerDeath), 1);
        assert_eq!(audio.count(SoundCue::BurgerDamage), 1);

        // More damage after death: no second explosion, no cues
        world.projectiles.push(enemy_shot_on_burger(&world));
        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert_eq!(world.burger.health(), 0);
        assert_eq!(world.explosions.len(), 1);
        assert_eq!(audio.count(SoundCue::BurgerDeath), 1);
        assert_eq!(audio.count(SoundCue::BurgerDamage), 1);
    }

    #[test]
    fn test_world_keeps_running_after_death() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        world.burger.set_health(0);
        world.bears.push(TeddyBear::new(
            Rect::new(300.0, 100.0, 40.0, 48.0),
            Vec2::new(60.0, 0.0),
        ));

        let fire_left = TickInput {
            left: true,
            fire: true,
            ..Default::default()
        };
        let burger_before = world.burger.rect();
        tick(&mut world, &fire_left, SIM_DT, &mut audio);

        assert_eq!(world.phase, SessionPhase::PlayerDead);
        assert_eq!(world.burger.rect(), burger_before);
        assert_eq!(audio.count(SoundCue::BurgerShot), 0);
        assert!(world.bears[0].rect.x > 300.0);
    }

    #[test]
    fn test_firing_adds_french_fries() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };

        tick(&mut world, &fire, SIM_DT, &mut audio);

        assert_eq!(world.projectiles.len(), 1);
        assert_eq!(world.projectiles[0].kind(), ProjectileKind::PlayerShot);
        assert!(!world.projectiles[0].rect.intersects(&world.burger.rect()));
        assert_eq!(world.burger.health(), world.config.burger_initial_health);
        assert_eq!(audio.count(SoundCue::BurgerShot), 1);
        assert_eq!(world.stats.shots_fired, 1);
    }

    #[test]
    fn test_bears_fire_when_enabled() {
        let config = GameConfig {
            max_bears: 0,
            ..Default::default()
        };
        let mut world = World::empty(config, &SpriteCatalog::default(), 3);
        let mut audio = CueRecorder::new();
        world.bears.push(
            TeddyBear::new(Rect::new(300.0, 100.0, 40.0, 48.0), Vec2::ZERO)
                .with_fire_delay(SIM_DT / 2.0),
        );

        tick(&mut world, &idle(), SIM_DT, &mut audio);

        assert_eq!(world.projectiles.len(), 1);
        assert_eq!(world.projectiles[0].kind(), ProjectileKind::EnemyShot);
        assert!(world.projectiles[0].rect.top() > world.bears[0].rect.bottom());
        assert!(world.bears[0].fire_delay().is_some());
        assert_eq!(audio.count(SoundCue::TeddyShot), 1);
    }

    #[test]
    fn test_quit_is_terminal() {
        let mut world = quiet_world();
        let mut audio = CueRecorder::new();
        tick(&mut world, &idle(), SIM_DT, &mut audio);

        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut world, &quit, SIM_DT, &mut audio);
        assert_eq!(world.phase, SessionPhase::Exiting);

        let frames = world.stats.frames;
        tick(&mut world, &idle(), SIM_DT, &mut audio);
        assert_eq!(world.phase, SessionPhase::Exiting);
        assert_eq!(world.stats.frames, frames);
    }

    #[test]
    fn test_autopilot_lines_up_under_bear() {
        let mut world = quiet_world();
        world.bears.push(TeddyBear::new(
            Rect::new(50.0, 100.0, 40.0, 48.0),
            Vec2::ZERO,
        ));
        let input = autopilot_input(&world);
        assert!(input.left);
        assert!(!input.right);
        assert!(!input.fire);

        world.bears[0].rect.x = world.burger.center().x - 20.0;
        let input = autopilot_input(&world);
        assert!(!input.left && !input.right);
        assert!(input.fire);
    }

    #[test]
    fn test_determinism() {
        // Two worlds with the same seed and inputs stay identical
        let mut world1 = World::new(GameConfig::default(), &SpriteCatalog::default(), 99999);
        let mut world2 = World::new(GameConfig::default(), &SpriteCatalog::default(), 99999);
        let mut audio1 = CueRecorder::new();
        let mut audio2 = CueRecorder::new();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };

        for _ in 0..600 {
            tick(&mut world1, &input, SIM_DT, &mut audio1);
            tick(&mut world2, &input, SIM_DT, &mut audio2);
        }

        assert_eq!(world1.score, world2.score);
        assert_eq!(world1.burger.health(), world2.burger.health());
        assert_eq!(world1.stats, world2.stats);
        assert_eq!(audio1.cues, audio2.cues);
        let rects1: Vec<Rect> = world1.bears.iter().map(|b| b.rect).collect();
        let rects2: Vec<Rect> = world2.bears.iter().map(|b| b.rect).collect();
        assert_eq!(rects1, rects2);
    }

    #[test]
    fn test_pools_hold_only_live_entities_after_tick() {
        let mut world = World::new(GameConfig::default(), &SpriteCatalog::default(), 1234);
        let mut audio = CueRecorder::new();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..900 {
            tick(&mut world, &input, SIM_DT, &mut audio);
            assert!(world.bears.iter().all(|b| b.active));
            assert!(world.projectiles.iter().all(|p| p.active));
            assert!(world.explosions.iter().all(|e| !e.finished()));
            assert!(world.arena.contains(&world.burger.rect()));
            assert!(world.burger.health() >= 0);
        }
    }
}
