//! Silhouettes for the five pattern families, as path commands already
//! placed in surface coordinates.

use super::constants::ZELLIGE_LINE_WIDTH;
use super::palette::Pattern;
use glam::{Affine2, Vec2};
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    Circle { center: Vec2, radius: f32 },
    Close,
}

pub type Path = SmallVec<[PathCmd; 24]>;

/// One drawing operation for a shape. `alpha` scales the shape's own opacity.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeOp {
    Fill { path: Path, alpha: f32 },
    Stroke { path: Path, alpha: f32, width: f32 },
}

pub type ShapeOps = SmallVec<[ShapeOp; 3]>;

const STAR_POINTS: usize = 8;
const STAR_INNER: f32 = 0.5;
const DIAMOND_WIDTH: f32 = 0.6;
const ZELLIGE_LAYERS: usize = 3;
const ZELLIGE_STEP: f32 = 0.25;
const PETALS: usize = 6;
const PETAL_REACH: f32 = 0.5;
const PETAL_BULGE: f32 = 0.3;
const ROSETTE_CENTER: f32 = 0.2;

pub fn shape_ops(pattern: Pattern, center: Vec2, size: f32, rotation: f32) -> ShapeOps {
    let xf = Affine2::from_angle_translation(rotation, center);
    let mut ops = ShapeOps::new();
    match pattern {
        Pattern::Star => ops.push(ShapeOp::Fill {
            path: star(&xf, size),
            alpha: 1.0,
        }),
        Pattern::Hexagon => ops.push(ShapeOp::Fill {
            path: polygon(&xf, size, 6),
            alpha: 1.0,
        }),
        Pattern::Diamond => ops.push(ShapeOp::Fill {
            path: closed(
                &xf,
                &[
                    Vec2::new(0.0, -size),
                    Vec2::new(size * DIAMOND_WIDTH, 0.0),
                    Vec2::new(0.0, size),
                    Vec2::new(-size * DIAMOND_WIDTH, 0.0),
                ],
            ),
            alpha: 1.0,
        }),
        Pattern::Zellige => {
            // Nested squares; each layer also inherits the previous fade
            let mut alpha = 1.0;
            for i in 0..ZELLIGE_LAYERS {
                let k = 1.0 - i as f32 * ZELLIGE_STEP;
                let h = size * k / 2.0;
                alpha *= k;
                ops.push(ShapeOp::Stroke {
                    path: closed(
                        &xf,
                        &[
                            Vec2::new(-h, -h),
                            Vec2::new(h, -h),
                            Vec2::new(h, h),
                            Vec2::new(-h, h),
                        ],
                    ),
                    alpha,
                    width: ZELLIGE_LINE_WIDTH,
                });
            }
        }
        Pattern::Arabesque => {
            ops.push(ShapeOp::Fill {
                path: rosette(&xf, size),
                alpha: 1.0,
            });
            let mut dot = Path::new();
            dot.push(PathCmd::Circle {
                center,
                radius: size * ROSETTE_CENTER,
            });
            ops.push(ShapeOp::Fill { path: dot, alpha: 1.0 });
        }
    }
    ops
}

fn closed(xf: &Affine2, local: &[Vec2]) -> Path {
    let mut path = Path::new();
    for (i, p) in local.iter().enumerate() {
        let q = xf.transform_point2(*p);
        path.push(if i == 0 {
            PathCmd::MoveTo(q)
        } else {
            PathCmd::LineTo(q)
        });
    }
    path.push(PathCmd::Close);
    path
}

fn polygon(xf: &Affine2, radius: f32, sides: usize) -> Path {
    let pts: SmallVec<[Vec2; 16]> = (0..sides)
        .map(|i| Vec2::from_angle(TAU * i as f32 / sides as f32) * radius)
        .collect();
    closed(xf, &pts)
}

fn star(xf: &Affine2, size: f32) -> Path {
    let pts: SmallVec<[Vec2; 16]> = (0..STAR_POINTS * 2)
        .map(|i| {
            let r = if i % 2 == 0 { size } else { size * STAR_INNER };
            Vec2::from_angle(PI / STAR_POINTS as f32 * i as f32) * r
        })
        .collect();
    closed(xf, &pts)
}

fn rosette(xf: &Affine2, size: f32) -> Path {
    let origin = xf.transform_point2(Vec2::ZERO);
    let mut path = Path::new();
    for i in 0..PETALS {
        let tip = Vec2::from_angle(TAU * i as f32 / PETALS as f32) * size * PETAL_REACH;
        let bulge = Vec2::new(size * PETAL_BULGE, 0.0);
        path.push(PathCmd::MoveTo(origin));
        path.push(PathCmd::QuadTo {
            ctrl: xf.transform_point2(tip + bulge),
            to: xf.transform_point2(tip),
        });
        path.push(PathCmd::QuadTo {
            ctrl: xf.transform_point2(tip - bulge),
            to: origin,
        });
    }
    path
}

/// Number of straight-edge vertices in a path.
pub fn vertex_count(path: &[PathCmd]) -> usize {
    path.iter()
        .filter(|c| matches!(c, PathCmd::MoveTo(_) | PathCmd::LineTo(_)))
        .count()
}
