/// Arcade physics: axis-aligned bodies, gravity, bounce, and separation
/// against static platforms.
///
/// Positions are body centres.  Each step integrates velocity, then resolves
/// X and Y independently so a body can slide along a ledge it lands on.

use crate::constants::REST_SPEED;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y - size.y / 2.0,
            w: size.x,
            h: size.y,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// A static platform body.  Never moves after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticBody {
    pub center: Vec2,
    pub size: Vec2,
}

impl StaticBody {
    pub fn rect(&self) -> Rect {
        Rect::centered(self.center, self.size)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub center: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub bounce: Vec2,
    /// Added on top of the world's gravity.
    pub gravity_y: f32,
    pub collide_world_bounds: bool,
    /// Disabled bodies neither move nor collide.
    pub enabled: bool,
    /// Set during a step when the body came to rest on top of a platform.
    pub touching_down: bool,
}

impl Body {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            size,
            velocity: Vec2::ZERO,
            bounce: Vec2::ZERO,
            gravity_y: 0.0,
            collide_world_bounds: false,
            enabled: true,
            touching_down: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.center, self.size)
    }

    /// Both bodies enabled and their rectangles overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.enabled && other.enabled && self.rect().intersects(&other.rect())
    }

    /// Re-enable at a new position with zero velocity.
    pub fn reset(&mut self, center: Vec2) {
        self.center = center;
        self.velocity = Vec2::ZERO;
        self.touching_down = false;
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.velocity = Vec2::ZERO;
        self.touching_down = false;
    }
}

/// Global simulation parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub gravity_y: f32,
    pub bounds: Rect,
}

fn rebound(speed: f32, bounce: f32) -> f32 {
    let v = -speed * bounce;
    // fully elastic bodies never settle
    if bounce < 1.0 && v.abs() < REST_SPEED {
        0.0
    } else {
        v
    }
}

/// Vertical flight over one step.
///
/// The step integrates semi-implicitly (velocity first, then position), which
/// keeps `(vy + g·dt/2)² − 2·g·y` constant in free flight.  A vertical contact
/// takes its impact speed from that quantity at the contact height rather than
/// from the overshooting end-of-step velocity, so elastic bodies bounce back
/// to the height they fell from.
#[derive(Clone, Copy, Debug)]
struct Flight {
    y: f32,
    /// `vy + half_kick` at `y`.
    w: f32,
    gravity: f32,
    half_kick: f32,
}

impl Flight {
    fn start(body: &Body, gravity: f32, dt: f32) -> Self {
        let half_kick = gravity * dt / 2.0;
        Self { y: body.center.y, w: body.velocity.y + half_kick, gravity, half_kick }
    }

    fn speed_at(&self, y: f32) -> f32 {
        (self.w * self.w + 2.0 * self.gravity * (y - self.y)).max(0.0).sqrt()
    }

    /// Velocity leaving a contact at `y`, heading up when `upward`.
    fn bounce_at(&mut self, y: f32, bounce: f32, upward: bool) -> f32 {
        let speed = self.speed_at(y) * bounce;
        let v = if bounce < 1.0 && speed < REST_SPEED {
            0.0
        } else if upward {
            -speed - self.half_kick
        } else {
            speed - self.half_kick
        };
        self.y = y;
        self.w = v + self.half_kick;
        v
    }
}

/// Advance `body` by `dt` seconds, separating it from `platforms`.
pub fn step_body(body: &mut Body, platforms: &[StaticBody], world: &World, dt: f32) {
    body.touching_down = false;
    if !body.enabled {
        return;
    }

    let mut flight = Flight::start(body, world.gravity_y + body.gravity_y, dt);
    body.velocity.y += flight.gravity * dt;

    // X
    body.center.x += body.velocity.x * dt;
    for p in platforms {
        let r = body.rect();
        let pr = p.rect();
        if !r.intersects(&pr) {
            continue;
        }
        if body.velocity.x > 0.0 {
            body.center.x = pr.x - body.size.x / 2.0;
        } else if body.velocity.x < 0.0 {
            body.center.x = pr.right() + body.size.x / 2.0;
        } else {
            continue;
        }
        body.velocity.x = rebound(body.velocity.x, body.bounce.x);
    }

    // Y
    body.center.y += body.velocity.y * dt;
    for p in platforms {
        let r = body.rect();
        let pr = p.rect();
        if !r.intersects(&pr) {
            continue;
        }
        if body.velocity.y > 0.0 {
            body.center.y = pr.y - body.size.y / 2.0;
            body.velocity.y = flight.bounce_at(body.center.y, body.bounce.y, true);
            body.touching_down = true;
        } else if body.velocity.y < 0.0 {
            body.center.y = pr.bottom() + body.size.y / 2.0;
            body.velocity.y = flight.bounce_at(body.center.y, body.bounce.y, false);
        }
    }

    if body.collide_world_bounds {
        clamp_to_bounds(body, &world.bounds, &mut flight);
    }
}

fn clamp_to_bounds(body: &mut Body, bounds: &Rect, flight: &mut Flight) {
    let half_w = body.size.x / 2.0;
    let half_h = body.size.y / 2.0;

    if body.center.x - half_w < bounds.x {
        body.center.x = bounds.x + half_w;
        body.velocity.x = rebound(body.velocity.x, body.bounce.x);
    } else if body.center.x + half_w > bounds.right() {
        body.center.x = bounds.right() - half_w;
        body.velocity.x = rebound(body.velocity.x, body.bounce.x);
    }

    if body.center.y - half_h < bounds.y {
        body.center.y = bounds.y + half_h;
        body.velocity.y = flight.bounce_at(body.center.y, body.bounce.y, false);
    } else if body.center.y + half_h > bounds.bottom() {
        body.center.y = bounds.bottom() - half_h;
        body.velocity.y = flight.bounce_at(body.center.y, body.bounce.y, true);
    }
}
