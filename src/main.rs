#![allow(clippy::uninlined_format_args)]

use rayon::prelude::*;

use scope_math::{
    error::Error,
    io_utils::*,
    log_utils::*,
    options::*,
    sexagesimal::*,
    sky_math::*,
};

/// (dec, ha) pairs checked by local equatorial -> horizontal -> back
const ROUND_TRIP_CASES: [(f64, f64); 6] = [
    (0.0, 0.0),
    (90.0, 0.0),
    (-90.0, 0.0),
    (35.0, 360.0),
    (46.12345, 720.0),
    (89.99998, 187.0),
];

const ROUND_TRIP_EPS: f64 = 1e-7;

/// Axis offset (alt, azi) used for the misalignment demo when mount is aligned
const DEMO_AXIS_ERROR: (f64, f64) = (1.1, 1.4);

fn test_round_trip(dec: f64, ha: f64, loc: &Location) -> bool {
    let coord = LocalEqCoord { dec, ha };
    let horiz = local_equatorial_to_azimuthal(coord, loc);
    println!("Alt = {:.6},\tAzi = {:.6}", horiz.alt, horiz.azi);
    let back = azimuthal_to_local_equatorial(horiz, loc);
    println!("Dec = {:.10},\tHA = {:.10}", back.dec, back.ha);
    same_position(&coord, &back, ROUND_TRIP_EPS)
}

/// Worst round trip error (degrees) over whole sky with 1 degree step
fn sweep_round_trip(loc: &Location) -> f64 {
    (-89..=89).into_par_iter()
        .map(|dec| {
            let dec = dec as f64;
            (0..360)
                .map(|ha| {
                    let crd = LocalEqCoord { dec, ha: ha as f64 };
                    let horiz = local_equatorial_to_azimuthal(crd, loc);
                    let back = azimuthal_to_local_equatorial(horiz, loc);
                    f64::max(
                        f64::abs(back.dec - crd.dec),
                        f64::abs(remainder(back.ha - crd.ha, 360.0)),
                    )
                })
                .fold(0.0, f64::max)
        })
        .reduce(|| 0.0, f64::max)
}

fn parse_angle_arg(text: &str, what: &str) -> Result<f64, Error> {
    sexagesimal_to_value(text)
        .ok_or_else(|| Error::WrongArgument(format!("Can't parse {} `{}`", what, text)))
}

fn load_options() -> anyhow::Result<Options> {
    let mut options = match load_json_from_config_file::<Options>("options")? {
        Some(options) => options,
        None => {
            let options = Options::default();
            save_json_to_config(&options, "options")?;
            log::info!("Default options saved");
            options
        }
    };

    let mut args = std::env::args().skip(1);
    if let Some(lat) = args.next() {
        options.site.latitude = parse_angle_arg(&lat, "latitude")?;
    }
    if let Some(lon) = args.next() {
        options.site.longitude = parse_angle_arg(&lon, "longitude")?;
    }
    options.check()?;
    Ok(options)
}

fn print_sidereal_time(loc: &Location) {
    let now = chrono::Utc::now().naive_utc();
    let timestamp = timestamp_of(&now);
    let gmst = greenwich_mean_sidereal_time(timestamp);
    let lst = local_sidereal_time(timestamp, loc);
    println!("UTC  = {}", now.format("%Y-%m-%d %H:%M:%S"));
    println!("GMST = {}", value_to_sexagesimal(gmst / 15.0, true, 1));
    println!("LST  = {}", value_to_sexagesimal(lst / 15.0, true, 1));

    let polaris = EqCoord { dec: 89.264109, ra: 37.954561 };
    let horiz = equatorial_to_azimuthal(polaris, timestamp, loc);
    println!("Polaris: {:?}", horiz);
}

fn print_misalignment(options: &Options, loc: &Location) {
    let mut pa_opts = options.polar_axis.clone();
    if pa_opts.is_aligned() {
        (pa_opts.alt_error, pa_opts.azi_error) = DEMO_AXIS_ERROR;
    }
    let axis = pa_opts.axis(loc);
    let t = misaligned_polar_axis_transformation(axis, loc);
    println!("Mount axis: {:?}", axis);
    println!("Transformation: {:?}", t);

    for ha in [-90.0, -45.0, 0.0, 45.0, 90.0] {
        let mount = LocalEqCoord { dec: 30.0, ha };
        let real = transform(&t, mount);
        println!(
            "Mount {:?} -> real {:?}, error = {:.4}",
            mount, real, pointing_error(&t, mount)
        );
    }

    // Mount position to go to for object one hour west of meridian
    let target = LocalEqCoord { dec: 30.0, ha: earth_rotation_angle(3600.0) };
    println!("Goto {:?} -> mount {:?}", target, transform_inverse(&t, target));
}

fn main() -> anyhow::Result<()> {
    let _logger = start_logger(&get_logs_dir()?)?;

    log::info!(
        "{} {} ver. {} is started",
        env!("CARGO_PKG_NAME"),
        std::env::consts::ARCH,
        env!("CARGO_PKG_VERSION")
    );

    let options = load_options()?;
    let loc = options.site.location();
    log::info!("Site: {:?}", loc);

    for (dec, ha) in ROUND_TRIP_CASES {
        let ok = test_round_trip(dec, ha, &loc);
        if !ok {
            log::warn!("Round trip failed for dec={}, ha={}", dec, ha);
        }
        println!("{}", ok as i32);
    }

    let tmr = TimeLogger::start();
    let max_err = sweep_round_trip(&loc);
    tmr.log("sweep_round_trip");
    println!("Max round trip error = {:e} deg", max_err);

    print_sidereal_time(&loc);
    print_misalignment(&options, &loc);

    log::info!("Done");
    Ok(())
}
