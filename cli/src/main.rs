extern crate clap;
extern crate sigil;

use clap::*;

use sigil::math::{point, Box2D};
use sigil::raster::tiny_skia::Color;
use sigil::raster::{self, DrawStyle};

use std::io::{stderr, Write};

fn main() {
    env_logger::init();

    let matches = App::new("sigil")
        .version("0.1")
        .about("Renders map-marker symbol glyphs to PNG")
        .arg(
            Arg::with_name("VARIANT")
                .value_name("VARIANT")
                .help("Glyph variant: quatrefoil, flat-top, flat-bottom or left-bar")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("WIDTH")
                .long("width")
                .value_name("PIXELS")
                .help("Sets the image width (1000 by default)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("HEIGHT")
                .long("height")
                .value_name("PIXELS")
                .help("Sets the image height (1000 by default)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("MARGIN")
                .short("m")
                .long("margin")
                .value_name("PIXELS")
                .help("Inset of the outer glyph boundary (30 by default)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("INNER_MARGIN")
                .long("inner-margin")
                .value_name("PIXELS")
                .help("Inset of the inner glyph rectangle (240 by default)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("FILL")
                .long("fill")
                .value_name("COLOR")
                .help("Fill color as #rrggbb or #rrggbbaa (green by default)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("STROKE")
                .long("stroke")
                .value_name("COLOR")
                .help("Stroke color as #rrggbb or #rrggbbaa (white by default)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("STROKE_WIDTH")
                .long("stroke-width")
                .value_name("PIXELS")
                .help("Stroke width (20 by default)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Sets the output file to use (output.png by default)")
                .takes_value(true),
        )
        .get_matches();

    let width = get_number(&matches, "WIDTH", 1000.0) as u32;
    let height = get_number(&matches, "HEIGHT", 1000.0) as u32;
    let margin = get_number(&matches, "MARGIN", 30.0);
    let inner_margin = get_number(&matches, "INNER_MARGIN", 240.0);
    let stroke_width = get_number(&matches, "STROKE_WIDTH", 20.0);
    let output = matches.value_of("OUTPUT").unwrap_or("output.png");

    let style = DrawStyle {
        fill_color: get_color(&matches, "FILL", Color::from_rgba8(0, 128, 0, 255)),
        stroke_color: get_color(&matches, "STROKE", Color::from_rgba8(255, 255, 255, 255)),
        stroke_width,
    };

    let boundary = Box2D {
        min: point(0.0, 0.0),
        max: point(width as f32, height as f32),
    };
    let outer = boundary.inflate(-margin, -margin);
    let inner = boundary.inflate(-inner_margin, -inner_margin);

    let mut pixmap = match raster::new_pixmap(width, height) {
        Ok(pixmap) => pixmap,
        Err(e) => {
            writeln!(&mut stderr(), "{}", e).unwrap();
            std::process::exit(1);
        }
    };

    match matches.value_of("VARIANT").unwrap_or("left-bar") {
        "quatrefoil" => raster::draw_quatrefoil(&mut pixmap, &outer, &inner, &style),
        "flat-top" => raster::draw_flat_top(&mut pixmap, &outer, &inner, &style),
        "flat-bottom" => raster::draw_flat_bottom(&mut pixmap, &outer, &inner, &style),
        "left-bar" => raster::draw_left_bar(&mut pixmap, &outer, &inner, &style),
        other => {
            writeln!(&mut stderr(), "Unknown glyph variant {:?}", other).unwrap();
            std::process::exit(2);
        }
    }

    if let Err(e) = raster::write_png(&pixmap, output) {
        writeln!(&mut stderr(), "Cannot write {}: {}", output, e).unwrap();
        std::process::exit(1);
    }

    log::info!("image saved to {}", output);
    println!("Image saved to {}", output);
}

fn get_number(matches: &ArgMatches, name: &str, default: f32) -> f32 {
    if let Some(value) = matches.value_of(name) {
        return value.parse().unwrap_or(default);
    }
    default
}

fn get_color(matches: &ArgMatches, name: &str, default: Color) -> Color {
    let value = match matches.value_of(name) {
        Some(value) => value,
        None => {
            return default;
        }
    };
    match parse_color(value) {
        Some(color) => color,
        None => {
            writeln!(&mut stderr(), "Cannot parse color {:?}", value).unwrap();
            std::process::exit(2);
        }
    }
}

/// Parses `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
fn parse_color(value: &str) -> Option<Color> {
    let hex = value.trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Some(Color::from_rgba8(r, g, b, a))
}

#[test]
fn parse_color_values() {
    assert_eq!(parse_color("#008000"), Some(Color::from_rgba8(0, 128, 0, 255)));
    assert_eq!(parse_color("ffffff"), Some(Color::from_rgba8(255, 255, 255, 255)));
    assert_eq!(
        parse_color("#11223344"),
        Some(Color::from_rgba8(0x11, 0x22, 0x33, 0x44))
    );
    assert_eq!(parse_color("#123"), None);
    assert_eq!(parse_color("#zzzzzz"), None);
}
