#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Latitude {0} is out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("Polar axis altitude {0} is out of range [-90, 90]")]
    AxisAltitudeOutOfRange(f64),

    #[error("{0}")]
    WrongArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
