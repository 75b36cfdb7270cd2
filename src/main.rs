use stencil::{
    cli::{get_args, get_log_level_from_verbose, run},
    constants::{exit_codes, RENDER_STACK_SIZE},
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    let lvl = get_log_level_from_verbose(args.verbose);
    env_logger::Builder::new().filter_level(lvl).init();

    let result = std::thread::Builder::new()
        .name("render".to_string())
        .stack_size(RENDER_STACK_SIZE)
        .spawn(move || run(args))
        .and_then(|handle| {
            handle.join().map_err(|_| std::io::Error::other("render thread panicked"))
        });

    match result {
        Ok(Ok(())) => {}
        Ok(Err(err)) => default_error_handler(err),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(exit_codes::FAILURE);
        }
    }
}
