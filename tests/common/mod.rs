use rpn::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(cycles) {
            Event::Stopped => break,
            Event::Quit => {
                s.push_str("QUIT\n");
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("?{}\n", error));
                }
            }
            Event::Running => {}
            Event::Print(ps) => {
                s.push_str(&ps);
            }
        }
    }
    s
}

#[allow(dead_code)]
pub fn stack(runtime: &Runtime) -> Vec<f64> {
    runtime.stack().as_slice().to_vec()
}

#[allow(dead_code)]
pub fn assert_close(s: &str, expected: f64) {
    let val: f64 = s
        .trim()
        .trim_start_matches("= ")
        .parse()
        .unwrap_or_else(|_| panic!("not a result: {:?}", s));
    assert!(
        (val - expected).abs() < 1e-9,
        "{} is not close to {}",
        val,
        expected
    );
}
