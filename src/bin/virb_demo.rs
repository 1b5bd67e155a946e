use std::env;

use virb_rs::{network::Endpoint, product::Virb, Error};

use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let endpoint: Endpoint = match env::args().nth(1) {
        Some(arg) => arg.parse().expect("parse camera endpoint"),
        None => Endpoint::default(),
    };

    info!("camera: {}", endpoint);
    let camera = Virb::connect(endpoint).expect("construct virb client");

    match camera.status() {
        Ok(status) => info!("status: {:?}", status),
        Err(e) => {
            error!("status: {}", e);
            return;
        }
    }

    {
        let resp = camera.device_info();
        info!("device info: {:?}", resp);
    }

    {
        let resp = camera.features();
        info!("features: {:?}", resp);
    }

    {
        let resp = camera.get_features();
        info!("feature set: {:?}", resp);
    }

    match camera.sensors() {
        Ok(readings) => info!("sensors: {:?}", readings),
        Err(Error::NoSensors) => warn!("no sensors connected"),
        Err(e) => error!("sensors: {}", e),
    }

    {
        let resp = camera.media_dir_list();
        info!("media dirs: {:?}", resp);
    }

    info!(requests = camera.requests(), "all things done");
}
