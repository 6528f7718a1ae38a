use crate::mach::{Event, Runtime};

mod stack_test;

fn run(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(5000) {
            Event::Stopped | Event::Quit => break,
            Event::Running => {}
            Event::Print(ps) => s.push_str(&ps),
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("?{}\n", error));
                }
            }
        }
    }
    s
}
