use clap::Parser;
use hotelmap::app::{HotelMapApp, HotelMapAppError};

fn main() -> Result<(), HotelMapAppError> {
    env_logger::init();
    let args = HotelMapApp::parse();
    args.op.run()
}
