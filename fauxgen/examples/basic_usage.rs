//! Basic usage examples demonstrating the three mark kinds.
//!
//! This example drives the resolver by hand, the way a host framework's
//! collection hook would: attach a mark, call `generate_tests`, and receive
//! one registration with a value per test invocation.

use fauxgen::{
    ArgNames, Mark, Metafunc, StringKind, StringOptions, UsageResult, Value, create_rng,
    gen_string, generate_tests,
};

/// A toy host: one collected test function that prints what it would run.
struct DemoTest {
    name: &'static str,
    marks: Vec<Mark>,
}

impl DemoTest {
    fn new(name: &'static str, mark: Mark) -> Self {
        DemoTest {
            name,
            marks: vec![mark],
        }
    }
}

impl Metafunc for DemoTest {
    fn function_name(&self) -> &str {
        self.name
    }

    fn take_marks(&mut self) -> Vec<Mark> {
        std::mem::take(&mut self.marks)
    }

    fn parametrize(
        &mut self,
        argnames: &ArgNames,
        values: Vec<Value>,
        ids: Option<Vec<String>>,
    ) -> UsageResult<()> {
        let ids = ids.unwrap_or_default();
        for (index, value) in values.iter().enumerate() {
            println!(
                "  {}[{}] {} = {}",
                self.name,
                ids.get(index).map(String::as_str).unwrap_or("?"),
                argnames,
                value
            );
        }
        Ok(())
    }
}

fn example_1_string_mark() {
    println!("=== Example 1: faux_string ===");

    // Four alphabetic strings, twelve characters each.
    let mark = Mark::string([Value::from(4), Value::from("alpha")])
        .with_option("length", Value::from(12));
    let mut test = DemoTest::new("test_alpha", mark);
    generate_tests(&mut test).expect("valid mark");
}

fn example_2_callable_mark() {
    println!("\n=== Example 2: faux_callable ===");

    // A value factory producing (name, age) tuples, unpacked into two
    // argument names.
    let generate_person = Value::callable(|_, _| {
        let mut rng = create_rng();
        Value::List(vec![
            Value::Str(gen_string(
                StringKind::Alpha,
                Some(8),
                &StringOptions::new(),
                &mut rng,
            )),
            Value::Int(30),
        ])
    });
    let mark = Mark::callable([Value::from(3), generate_person])
        .with_option("argnames", Value::from("name, age"));
    let mut test = DemoTest::new("test_person", mark);
    generate_tests(&mut test).expect("valid mark");
}

fn example_3_generator_mark() {
    println!("\n=== Example 3: faux_generator ===");

    let mark = Mark::generator([
        Value::stream((1..=3).map(Value::from)),
        Value::stream(vec![Value::from("tail")]),
    ]);
    let mut test = DemoTest::new("test_stream", mark);
    generate_tests(&mut test).expect("valid mark");
}

fn example_4_validation_errors() {
    println!("\n=== Example 4: validation errors ===");

    // Zero items is rejected before any generation happens.
    let mark = Mark::callable([Value::from(0), Value::callable(|_, _| Value::None)]);
    match fauxgen::resolve(mark) {
        Ok(_) => unreachable!("the mark is invalid"),
        Err(err) => println!("  collection error: {}", err),
    }
}

fn main() {
    example_1_string_mark();
    example_2_callable_mark();
    example_3_generator_mark();
    example_4_validation_errors();
}
