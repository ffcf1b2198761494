//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;

use clap::{App, AppSettings, ArgMatches};
use dotenv::dotenv;
use env_logger::Builder;
use log::{debug, Record};
use region_grid::{parse_bounding_box, parse_levels, ParseError, RegionGrid};
use std::env;
use std::io::Write;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = if args.value_of("loglevel").is_none() && rust_log_env.is_ok() {
        rust_log_env.as_ref().unwrap()
    } else {
        args.value_of("loglevel").unwrap_or("info")
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn find_tiles(args: &ArgMatches<'_>) -> Result<(), ParseError> {
    let (from_level, to_level) = parse_levels(args.value_of("levels").unwrap())?;
    let bbox = parse_bounding_box([
        args.value_of("minlat").unwrap(),
        args.value_of("minlon").unwrap(),
        args.value_of("maxlat").unwrap(),
        args.value_of("maxlon").unwrap(),
    ])?;
    let accuracy = args.value_of("accuracy").map(|s| {
        s.parse::<u8>()
            .expect("Error parsing 'accuracy' as integer value")
    });
    let fld = args.value_of("fld").map_or(5.0, |s| {
        s.parse::<f64>()
            .expect("Error parsing 'fld' as float value")
    });
    debug!(
        "levels {}-{}, accuracy {:?}, subdivision factor {}",
        from_level, to_level, accuracy, fld
    );

    let grid = RegionGrid::new(fld);
    for tiles in grid.find_tiles(from_level, to_level, accuracy, &bbox) {
        println!("For level {}", tiles.level);
        println!(
            "y range = {} - {}, x range = {} - {}",
            tiles.range.min_row, tiles.range.max_row, tiles.range.min_col, tiles.range.max_col
        );
        println!("Min coordinates: {}, {}", tiles.bbox.min_lat, tiles.bbox.min_lon);
        println!("Max coordinates: {}, {}", tiles.bbox.max_lat, tiles.bbox.max_lon);
    }
    Ok(())
}

fn main() {
    dotenv().ok();
    let mut app = App::new("region_tiles")
        .version(crate_version!())
        .about("calculates map tile ranges covering a geographic region")
        .setting(AppSettings::AllowLeadingHyphen)
        .args_from_usage(
            "<levels> 'Level range, e.g. 7-9'
             <minlat> 'Minimum latitude of the region'
             <minlon> 'Minimum longitude of the region'
             <maxlat> 'Maximum latitude of the region'
             <maxlon> 'Maximum longitude of the region'
             --accuracy=[LEVEL] 'Snap corners at this level instead of the reported level'
             --fld=[FACTOR] 'Base subdivision factor (Default: 5)'
             --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'",
        );
    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => {
            init_logger(&matches);
            if let Err(e) = find_tiles(&matches) {
                println!("{}", e);
                std::process::exit(1);
            }
        }
    }
}
