use param_map::{ParamError, ParamMap};

fn process_person(name: String, age: i32) {
    println!("Processing {name:?} (age: {age})");
}

fn main() -> Result<(), ParamError> {
    let mut params = ParamMap::<(String, i32)>::new(["name", "age"]);

    params.set("name", "Homer Simpson".to_string())?;
    if !params.is_set("age")? {
        println!("Age parameter has not been set.");
    }
    params.set("age", 35)?;
    params.submit(process_person)?;

    params.set("age", 38)?;
    println!(
        "Age parameter has been updated to: {}.",
        params.get::<i32, _>("age")?
    );
    Ok(())
}
