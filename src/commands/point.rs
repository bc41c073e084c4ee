use super::{write_json, write_title, APP_NAME, RULE};
use crate::point::Point;
use anyhow::{Context, Result};
use serde_json::json;
use std::io::Write;
use tracing::debug;

pub fn distance(x1: i32, y1: i32, x2: i32, y2: i32, out: &mut impl Write) -> Result<()> {
    write_title(out, "Distance Calculation")?;

    let p1 = Point::new(x1, y1);
    let p2 = Point::new(x2, y2);
    let d = p1.distance_to(&p2);
    debug!(%p1, %p2, d, "distance");

    writeln!(out, "Point 1: {}", p1)?;
    writeln!(out, "Point 2: {}", p2)?;
    writeln!(out, "Distance: {:.6}\n", d)?;

    write_json(
        out,
        &json!({
            "point1": p1,
            "point2": p2,
            "distance": d,
        }),
    )
}

pub fn move_point(x: i32, y: i32, dx: i32, dy: i32, out: &mut impl Write) -> Result<()> {
    write_title(out, "Move Operation")?;

    let initial = Point::new(x, y);
    writeln!(out, "Initial point: {}", initial)?;
    writeln!(out, "Moving by: ({}, {})", dx, dy)?;

    let p = initial
        .checked_moved(dx, dy)
        .with_context(|| format!("Moving {} by ({}, {}) overflows i32", initial, dx, dy))?;
    writeln!(out, "Result: {}\n", p)?;

    write_json(
        out,
        &json!({
            "initial": initial,
            "delta": { "dx": dx, "dy": dy },
            "result": p,
        }),
    )
}

pub fn arithmetic(ax: i32, ay: i32, bx: i32, by: i32, scalar: f64, out: &mut impl Write) -> Result<()> {
    write_title(out, "Arithmetic Operations")?;

    let pa = Point::new(ax, ay);
    let pb = Point::new(bx, by);
    let sum = pa
        .checked_add(pb)
        .with_context(|| format!("{} + {} overflows i32", pa, pb))?;
    let difference = pa
        .checked_sub(pb)
        .with_context(|| format!("{} - {} overflows i32", pa, pb))?;
    let scaled = pa.scale(scalar);

    writeln!(out, "Point A: {}", pa)?;
    writeln!(out, "Point B: {}", pb)?;
    writeln!(out, "\nOperations:")?;
    writeln!(out, "  A + B = {}", sum)?;
    writeln!(out, "  A - B = {}", difference)?;
    writeln!(out, "  A * {:.2} = {}\n", scalar, scaled)?;

    write_json(
        out,
        &json!({
            "pointA": pa,
            "pointB": pb,
            "addition": sum,
            "subtraction": difference,
            "scalar_multiplication": {
                "scalar": scalar,
                "result": scaled,
            },
        }),
    )
}

/// The full `Point<T>` walkthrough.
pub fn demo(out: &mut impl Write) -> Result<()> {
    write_title(out, "Point<T> Demo")?;

    // 1. Integer points
    writeln!(out, "1. Integer Points:")?;
    let p1 = Point::new(0, 0);
    let p2 = Point::new(3, 4);
    writeln!(out, "   Point p1: {}", p1)?;
    writeln!(out, "   Point p2: {}", p2)?;
    writeln!(out, "   Distance: {:.6}\n", p1.distance_to(&p2))?;

    // 2. Floating-point points
    writeln!(out, "2. Double Points:")?;
    let p3 = Point::new(1.5, 2.5);
    let p4 = Point::new(4.5, 6.5);
    writeln!(out, "   Point p3: {}", p3)?;
    writeln!(out, "   Point p4: {}", p4)?;
    writeln!(out, "   Distance: {:.6}\n", p3.distance_to(&p4))?;

    // 3. Moves
    writeln!(out, "3. Move Operations:")?;
    let mut moving = Point::new(0, 0);
    writeln!(out, "   Before move: {}", moving)?;
    moving.move_by(5, -2);
    writeln!(out, "   After move(5, -2): {}", moving)?;
    writeln!(out, "   Distance to p2: {:.6}\n", moving.distance_to(&p2))?;

    // 4. Equality
    writeln!(out, "4. Equality Tests:")?;
    let p5 = Point::new(3, 4);
    let p6 = Point::new(3, 4);
    let p7 = Point::new(5, 6);
    writeln!(out, "   p5 {} == p6 {} : {}", p5, p6, p5 == p6)?;
    writeln!(out, "   p5 {} == p7 {} : {}", p5, p7, p5 == p7)?;
    writeln!(out, "   p5 {} != p7 {} : {}\n", p5, p7, p5 != p7)?;

    // 5. Arithmetic
    writeln!(out, "5. Arithmetic Operations:")?;
    let pa = Point::new(10, 20);
    let pb = Point::new(3, 7);
    writeln!(out, "   pa: {}", pa)?;
    writeln!(out, "   pb: {}", pb)?;
    writeln!(out, "   pa + pb = {}", pa + pb)?;
    writeln!(out, "   pa - pb = {}", pa - pb)?;
    writeln!(out, "   pa * 2.5 = {}\n", pa.scale(2.5))?;

    // 6. Large values
    writeln!(out, "6. Edge Case - Large Values:")?;
    let large1 = Point::new(1_000_000, 1_000_000);
    let large2 = Point::new(-1_000_000, -1_000_000);
    writeln!(out, "   Point 1: {}", large1)?;
    writeln!(out, "   Point 2: {}", large2)?;
    writeln!(out, "   Distance: {:.6}\n", large1.distance_to(&large2))?;

    // 7. Many small moves
    writeln!(out, "7. Stability Test - 100 Consecutive Moves:")?;
    let mut stable = Point::new(0, 0);
    writeln!(out, "   Start: {}", stable)?;
    for _ in 0..100 {
        stable.move_by(1, 1);
    }
    writeln!(out, "   After 100 moves(1,1): {}\n", stable)?;

    // 8. Type safety
    writeln!(out, "8. Type Safety:")?;
    let pi = Point::new(5, 10);
    let pd = Point::new(5.5, 10.5);
    writeln!(out, "   Integer point: {}", pi)?;
    writeln!(out, "   Double point: {}", pd)?;
    writeln!(out, "   Note: Cannot mix types directly (compile-time safety)\n")?;

    // 9. Zero distance
    writeln!(out, "9. Edge Case - Zero Distance:")?;
    let same1 = Point::new(7, 9);
    let same2 = Point::new(7, 9);
    writeln!(out, "   Point 1: {}", same1)?;
    writeln!(out, "   Point 2: {}", same2)?;
    writeln!(out, "   Distance: {:.6}", same1.distance_to(&same2))?;
    writeln!(out, "   Are equal: {}\n", same1 == same2)?;

    // 10. JSON
    writeln!(out, "10. JSON Integration:")?;
    let report = json!({
        "points": [
            { "name": "origin", "x": p1.x, "y": p1.y },
            { "name": "target", "x": p2.x, "y": p2.y },
        ],
        "operations": {
            "distance": p1.distance_to(&p2),
            "sum": p1 + p2,
            "difference": p2 - p1,
        },
    });
    let text = serde_json::to_string_pretty(&report).context("Failed to render JSON output")?;
    writeln!(out, "   JSON output:\n{}\n", text)?;

    writeln!(out, "{}", RULE)?;
    writeln!(out, "All Point<T> operations completed successfully!")?;
    writeln!(out, "{}\n", RULE)?;
    writeln!(out, "Try these commands:")?;
    writeln!(out, "  {} distance --x1 0 --y1 0 --x2 3 --y2 4", APP_NAME)?;
    writeln!(out, "  {} move -x 10 -y 20 --dx 5 --dy -3", APP_NAME)?;
    writeln!(out, "  {} arithmetic --ax 10 --ay 20 --bx 3 --by 7 -s 2.5", APP_NAME)?;
    writeln!(out, "  {} demo", APP_NAME)?;
    writeln!(out, "  {} vector", APP_NAME)?;
    writeln!(out, "  {} growth -n 1000", APP_NAME)?;
    Ok(())
}
