//! Tests for action metadata.

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::action::{strip_controller_suffix, ActionCall, ActionMethod, Argument, Controller, Error};
    use crate::route::RouteValue;

    struct ProductsController;

    impl Controller for ProductsController {
        fn actions() -> Vec<ActionMethod> {
            vec![
                ActionMethod::new("Index"),
                ActionMethod::new("Details")
                    .param::<i32>("id")
                    .optional_param("category", "all"),
            ]
        }
    }

    struct OrdersController;

    impl Controller for OrdersController {
        fn actions() -> Vec<ActionMethod> {
            vec![
                ActionMethod::new("Edit").param::<i32>("id"),
                ActionMethod::new("Edit").param::<i32>("id").param::<String>("status"),
                ActionMethod::new("Archive").param::<i32>("id"),
                ActionMethod::new("Archive").param::<i32>("id").optional_param("reason", "none"),
            ]
        }
    }

    struct Pager<T>(T);

    impl<T: 'static> Controller for Pager<T> {
        fn actions() -> Vec<ActionMethod> {
            Vec::new()
        }
    }

    #[test]
    fn test_type_name_strips_module_path() {
        assert_eq!(ProductsController::type_name(), "ProductsController");
    }

    #[test]
    fn test_type_name_strips_generics() {
        assert_eq!(Pager::<u32>::type_name(), "Pager");
    }

    #[test]
    fn test_strip_controller_suffix() {
        assert_eq!(strip_controller_suffix("ProductsController").unwrap(), "Products");
        assert_eq!(strip_controller_suffix("Controller").unwrap(), "");
    }

    #[test]
    fn test_strip_controller_suffix_uses_last_occurrence() {
        assert_eq!(
            strip_controller_suffix("ControllerAdminControllerV2").unwrap(),
            "ControllerAdmin"
        );
    }

    #[test]
    fn test_strip_controller_suffix_missing() {
        let result = strip_controller_suffix("ProductsHandler");
        assert!(matches!(result, Err(Error::NamingConvention(ref name)) if name == "ProductsHandler"));
    }

    #[test]
    fn test_url_template_follows_declaration_order() {
        let method = ActionMethod::new("Search")
            .param::<String>("term")
            .param::<u32>("page")
            .nullable_param::<String>("sort");
        assert_eq!(method.url_template(), "{term}/{page}/{sort}");
    }

    #[test]
    fn test_url_template_without_parameters() {
        assert_eq!(ActionMethod::new("Index").url_template(), "");
    }

    #[test]
    fn test_parameter_metadata() {
        let method = ActionMethod::new("Details")
            .param::<i32>("id")
            .optional_param("category", "all")
            .nullable_param::<String>("tag");

        let id = method.parameter("id").unwrap();
        assert!(!id.optional);
        assert_eq!(id.type_name, "i32");
        assert!(!id.has_default());

        let category = method.parameter("category").unwrap();
        assert!(category.has_default());
        assert_eq!(category.default, Some(RouteValue::from("all")));

        let tag = method.parameter("tag").unwrap();
        assert!(tag.optional);
        assert!(!tag.has_default());

        assert!(method.parameter("missing").is_none());
    }

    #[test]
    fn test_resolve_known_action() {
        let call = ActionCall::<ProductsController>::new("Details");
        let method = call.resolve().unwrap();
        assert_eq!(method.name, "Details");
        assert_eq!(method.parameters.len(), 2);
    }

    #[test]
    fn test_resolve_unknown_action() {
        let call = ActionCall::<ProductsController>::new("Delete");
        let result = call.resolve();
        assert!(matches!(
            result,
            Err(Error::UnknownAction { ref controller, ref action })
                if controller == "ProductsController" && action == "Delete"
        ));
    }

    #[test]
    fn test_resolve_overload_by_argument_count() {
        let one = ActionCall::<OrdersController>::new("Edit").arg(1).resolve().unwrap();
        assert_eq!(one.parameters.len(), 1);

        let two = ActionCall::<OrdersController>::new("Edit")
            .arg(1)
            .arg("open")
            .resolve()
            .unwrap();
        assert_eq!(two.url_template(), "{id}/{status}");
    }

    #[test]
    fn test_resolve_overload_with_no_fitting_signature() {
        let result = ActionCall::<OrdersController>::new("Edit").resolve();
        assert!(matches!(
            result,
            Err(Error::AmbiguousAction { ref action, arguments: 0, matches: 0, .. }) if action == "Edit"
        ));
    }

    #[test]
    fn test_resolve_overload_with_several_fitting_signatures() {
        let result = ActionCall::<OrdersController>::new("Archive").arg(1).resolve();
        assert!(matches!(
            result,
            Err(Error::AmbiguousAction { arguments: 1, matches: 2, .. })
        ));
    }

    #[test]
    fn test_accepts_arguments() {
        let method = ActionMethod::new("Details")
            .param::<i32>("id")
            .optional_param("category", "all");
        assert!(!method.accepts_arguments(0));
        assert!(method.accepts_arguments(1));
        assert!(method.accepts_arguments(2));
        assert!(!method.accepts_arguments(3));
    }

    #[test]
    fn test_call_collects_arguments_in_order() {
        let call = ActionCall::<ProductsController>::new("Details")
            .arg(5)
            .parameter("category");
        let (_, arguments) = call.into_parts().unwrap();
        assert_eq!(arguments.len(), 2);
        assert!(matches!(arguments[0], Argument::Literal(_)));
        assert!(matches!(arguments[1], Argument::ParameterRef(ref name) if name == "category"));
    }

    #[test]
    fn test_literal_argument_resolves_to_value() {
        let value = Argument::literal(5).resolve("id").unwrap();
        assert_eq!(value, Some(RouteValue::from(5)));
    }

    #[test]
    fn test_parameter_ref_resolves_to_nothing() {
        let value = Argument::parameter("id").resolve("id").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_computed_argument_is_evaluated_on_resolve() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let argument = Argument::computed(move || {
            counter.set(counter.get() + 1);
            "computed"
        });

        assert_eq!(calls.get(), 0);
        let value = argument.resolve("category").unwrap();
        assert_eq!(value, Some(RouteValue::from("computed")));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_failing_computed_argument() {
        let argument = Argument::try_computed(|| "abc".parse::<i32>());
        let result = argument.resolve("id");
        assert!(matches!(result, Err(Error::ArgumentEvaluation { ref parameter, .. }) if parameter == "id"));
    }

    #[test]
    fn test_argument_debug_hides_thunk() {
        let argument = Argument::computed(|| 1);
        assert_eq!(format!("{argument:?}"), "Computed(..)");
    }
}
