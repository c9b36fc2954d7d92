//! A simple example registering routes for a products controller.

use fluentroute_rs::{
    ActionCall, ActionMethod, Controller, Method, MethodConstraint, RegexConstraint, RouteError, RouteFactory,
    RouteTable,
};

struct ProductsController;

impl Controller for ProductsController {
    fn actions() -> Vec<ActionMethod> {
        vec![
            ActionMethod::new("Index"),
            ActionMethod::new("Details")
                .param::<i32>("id")
                .optional_param("category", "all"),
            ActionMethod::new("Search")
                .param::<String>("term")
                .optional_param("page", 1)
                .nullable_param::<String>("sort"),
        ]
    }
}

fn main() -> Result<(), RouteError> {
    env_logger::init();

    let mut routes = RouteTable::new();

    // Index: name and path come straight from the controller
    RouteFactory::build(ActionCall::<ProductsController>::new("Index"), "")?.materialize(&mut routes)?;

    // Details: defaults taken from the call site
    let call = ActionCall::<ProductsController>::new("Details").arg(5).arg("shoes");
    RouteFactory::build_with_defaults(call, "")?
        .add_constraint("id", r"\d+")
        .add_constraint("category", RegexConstraint::new("[a-z]+")?)
        .add_global_constraint(MethodConstraint::new([Method::GET, Method::HEAD]))
        .materialize(&mut routes)?;

    // Search: custom URL, defaults from the signature
    RouteFactory::build(ActionCall::<ProductsController>::new("Search"), "search/{term}/{page}")?
        .set_name("product_search")
        .add_defaults_from_signature()
        .set_optional_parameter("sort")
        .materialize(&mut routes)?;

    println!("Registered {} routes:", routes.len());
    for route in routes.iter() {
        println!("  {} -> {}", route.name, route.path);
        for (key, value) in route.defaults.iter() {
            println!("    default {key} = {value}");
        }
        for (key, constraint) in route.constraints.iter() {
            println!("    constraint {key} = {constraint:?}");
        }
    }

    Ok(())
}
