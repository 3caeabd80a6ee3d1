use embassy_executor::Spawner;
use embassy_time::Delay;
use log::{error, info, warn};
use teleop_core::{
    ModeRegistry, MonotonicClock, Session, Supervisor, DEFAULT_MODES, DEFAULT_SESSION_CONFIG,
    DEFAULT_SUPERVISOR_CONFIG,
};
use tiny4wd::{
    ConsoleDisplay, ConsoleMotors, GilrsInput, LinuxSystem, DEFAULT_COMMANDS, DEFAULT_STICK_CONFIG,
};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("tiny4wd starting...");

    let registry = match ModeRegistry::new(&DEFAULT_MODES) {
        Ok(registry) => registry,
        Err(e) => {
            error!("Invalid mode list: {:?}", e);
            std::process::exit(1);
        }
    };

    let input = match GilrsInput::new(DEFAULT_STICK_CONFIG) {
        Ok(input) => input,
        Err(e) => {
            error!("No gamepad support: {:?}", e);
            std::process::exit(1);
        }
    };

    warn!("No motor HAT driver available, logging motor commands instead");
    warn!("No OLED driver available, logging display frames instead");

    let session = Session::new(
        registry,
        DEFAULT_SESSION_CONFIG,
        ConsoleMotors::new(),
        ConsoleDisplay::new(),
        LinuxSystem::new(DEFAULT_COMMANDS),
    );
    let mut supervisor = Supervisor::new(
        input,
        session,
        MonotonicClock,
        Delay,
        DEFAULT_SUPERVISOR_CONFIG,
    );

    match supervisor.run().await {
        Ok(()) => {
            info!("Exited to command line");
            std::process::exit(0);
        }
        Err(e) => {
            error!("Stopped on error: {:?}", e);
            std::process::exit(1);
        }
    }
}
