//! Navigation behaviour driven through the public API, including
//! property checks over arbitrary tab/account/back sequences.

use proptest::prelude::*;

use ui::components::tab_row_model;
use ui::data::UserData;
use ui::nav::{Destination, NavController, NavGraph, NavOutcome, TAB_ROW_SCREENS};
use ui::router::{resolve_screen, Screen};

#[derive(Debug, Clone)]
enum Action {
    Tab(Destination),
    Account(String),
    DeepLink(String),
    Back,
}

fn controller() -> NavController {
    NavController::new(NavGraph::rally().expect("rally graph"))
}

fn action() -> impl Strategy<Value = Action> {
    let names = prop::sample::select(vec![
        "Checking".to_string(),
        "Home Savings".to_string(),
        "Vacation".to_string(),
        "Rent".to_string(),
    ]);
    prop_oneof![
        4 => prop::sample::select(TAB_ROW_SCREENS.to_vec()).prop_map(Action::Tab),
        2 => names.clone().prop_map(Action::Account),
        1 => names.prop_map(|name| Action::DeepLink(format!("rally://single_account/{name}"))),
        1 => Just(Action::Back),
    ]
}

fn apply(nav: &mut NavController, action: &Action) {
    match action {
        Action::Tab(destination) => {
            nav.navigate_single_top(destination.route()).expect("tab route");
        }
        Action::Account(name) => {
            nav.navigate_to_single_account(name).expect("account route");
        }
        Action::DeepLink(uri) => {
            nav.handle_deep_link(uri).expect("deep link");
        }
        Action::Back => {
            nav.pop_back_stack();
        }
    }
}

proptest! {
    #[test]
    fn tab_selection_never_grows_the_stack(tabs in prop::collection::vec(
        prop::sample::select(TAB_ROW_SCREENS.to_vec()), 0..64)
    ) {
        let mut nav = controller();
        for tab in tabs {
            nav.navigate_single_top(tab.route()).unwrap();
            prop_assert!(nav.depth() <= 2);
            prop_assert_eq!(nav.current_screen(), tab);
        }
    }

    #[test]
    fn stack_stays_shallow_and_rooted(actions in prop::collection::vec(action(), 0..64)) {
        let mut nav = controller();
        for action in &actions {
            apply(&mut nav, action);
            prop_assert!(nav.depth() >= 1 && nav.depth() <= 2);
            prop_assert_eq!(nav.back_stack()[0].destination, Destination::Overview);
        }
    }

    #[test]
    fn tab_row_always_mirrors_current_screen(actions in prop::collection::vec(action(), 0..64)) {
        let mut nav = controller();
        for action in &actions {
            apply(&mut nav, action);
            let current = nav.current_screen();
            let selected: Vec<_> = tab_row_model(&TAB_ROW_SCREENS, current)
                .into_iter()
                .filter(|tab| tab.selected)
                .map(|tab| tab.destination)
                .collect();
            prop_assert_eq!(selected, vec![current]);
        }
    }

    #[test]
    fn reselecting_the_active_tab_changes_nothing(actions in prop::collection::vec(action(), 0..32)) {
        let mut nav = controller();
        for action in &actions {
            apply(&mut nav, action);
        }
        let route = nav.current_entry().route.clone();
        let before = nav.clone();
        prop_assert_eq!(nav.navigate_single_top(&route), Ok(NavOutcome::AlreadyOnTop));
        prop_assert_eq!(nav, before);
    }
}

#[test]
fn accounts_state_survives_a_trip_to_overview() {
    let mut nav = controller();
    nav.navigate_single_top("accounts").unwrap();
    nav.update_current_state(|state| state.put("last_opened", "Vacation"));
    let accounts_id = nav.current_entry().id;

    nav.navigate_single_top("overview").unwrap();
    assert_eq!(nav.depth(), 1);

    assert_eq!(nav.navigate_single_top("accounts"), Ok(NavOutcome::Restored));
    let entry = nav.current_entry();
    assert_ne!(entry.id, accounts_id, "restored into a fresh entry");
    assert_eq!(entry.state.get::<String>("last_opened").as_deref(), Some("Vacation"));
}

#[test]
fn opening_an_account_from_the_accounts_tab() {
    let mut nav = controller();
    nav.navigate_single_top("accounts").unwrap();
    nav.update_current_state(|state| state.put("last_opened", "Checking"));
    nav.navigate_to_single_account("Checking").unwrap();

    assert_eq!(nav.depth(), 2);
    assert_eq!(
        resolve_screen(nav.current_entry()),
        Screen::SingleAccount {
            account_type: Some("Checking".into())
        }
    );
    // Detail screens are not tabs; the row falls back to the start tab.
    assert_eq!(nav.current_screen(), Destination::Overview);
    assert!(nav.saved_state("accounts").is_some());
}

#[test]
fn deep_link_and_in_app_navigation_agree() {
    let mut linked = controller();
    linked.navigate_single_top("bills").unwrap();
    linked.handle_deep_link("rally://single_account/Rent").unwrap();

    let mut organic = controller();
    organic.navigate_single_top("bills").unwrap();
    organic.navigate_to_single_account("Rent").unwrap();

    assert_eq!(
        resolve_screen(linked.current_entry()),
        resolve_screen(organic.current_entry())
    );
    assert_eq!(linked.back_stack().len(), organic.back_stack().len());
}

#[test]
fn unknown_accounts_navigate_but_do_not_resolve() {
    let data = UserData::sample();
    let mut nav = controller();
    nav.navigate_to_single_account("Rent").unwrap();

    let Screen::SingleAccount { account_type } = resolve_screen(nav.current_entry()) else {
        panic!("expected the single account screen");
    };
    let name = account_type.expect("argument bound");
    assert!(data.get_account(&name).is_err());
}
