use contactctl_core::{filter_contacts, Address, Company, Contact, ContactStore, Geo, Pager};
use proptest::prelude::*;

// Strategy to generate contacts with short, collision-prone text so queries hit
fn arb_text() -> impl Strategy<Value = String> {
    "[a-cA-C0-2 .-]{0,8}"
}

fn arb_contact() -> impl Strategy<Value = Contact> {
    (
        any::<u64>(),
        prop::collection::vec(arb_text(), 12),
        ("-?[0-9]{1,2}\\.[0-9]{4}", "-?[0-9]{1,3}\\.[0-9]{4}"),
    )
        .prop_map(|(id, text, (lat, lng))| Contact {
            id,
            name: text[0].clone(),
            username: text[1].clone(),
            email: text[2].clone(),
            phone: text[3].clone(),
            website: text[4].clone(),
            address: Address {
                street: text[5].clone(),
                suite: text[6].clone(),
                city: text[7].clone(),
                zipcode: text[8].clone(),
                geo: Geo { lat, lng },
            },
            company: Company {
                name: text[9].clone(),
                catch_phrase: text[10].clone(),
                bs: text[11].clone(),
            },
        })
}

fn arb_contacts() -> impl Strategy<Value = Vec<Contact>> {
    prop::collection::vec(arb_contact(), 0..30)
}

proptest! {
    /// Property: filtering the filtered list by the same query changes nothing
    #[test]
    fn prop_filter_is_idempotent(contacts in arb_contacts(), query in arb_text()) {
        let once = filter_contacts(&contacts, &query);
        let twice = filter_contacts(&once, &query);
        prop_assert_eq!(once, twice);
    }

    /// Property: empty query is the identity
    #[test]
    fn prop_empty_query_is_identity(contacts in arb_contacts()) {
        prop_assert_eq!(filter_contacts(&contacts, ""), contacts);
    }

    /// Property: result is an order-preserving subsequence of the input
    #[test]
    fn prop_filter_preserves_order(contacts in arb_contacts(), query in arb_text()) {
        let filtered = filter_contacts(&contacts, &query);
        let mut rest = contacts.iter();
        for kept in &filtered {
            prop_assert!(rest.any(|c| c == kept));
        }
    }

    /// Property: upper- and lower-case queries select the same records
    #[test]
    fn prop_filter_ignores_case(contacts in arb_contacts(), query in arb_text()) {
        prop_assert_eq!(
            filter_contacts(&contacts, &query.to_uppercase()),
            filter_contacts(&contacts, &query.to_lowercase())
        );
    }

    /// Property: coordinates alone never produce a match
    #[test]
    fn prop_geo_never_matches(contact in arb_contact()) {
        let lat = contact.address.geo.lat.clone();
        let lng = contact.address.geo.lng.clone();
        // text fields never contain digits 3-9, coordinates always end in four digits
        prop_assume!(lat.chars().rev().take(4).any(|c| ('3'..='9').contains(&c)));
        prop_assert!(!contact.matches(&lat));
        prop_assume!(lng.chars().rev().take(4).any(|c| ('3'..='9').contains(&c)));
        prop_assert!(!contact.matches(&lng));
    }

    /// Property: concatenating all page windows reproduces the list
    #[test]
    fn prop_pages_cover_list(len in 0usize..100, size in 1usize..15) {
        let items: Vec<usize> = (0..len).collect();
        let pager = Pager::new(size);
        let joined: Vec<usize> = (0..pager.page_count(len))
            .flat_map(|page| pager.window(&items, page).to_vec())
            .collect();
        prop_assert_eq!(joined, items);
        prop_assert!(pager.window(&(0..len).collect::<Vec<_>>(), pager.page_count(len)).is_empty());
    }

    /// Property: any query change lands on page 0
    #[test]
    fn prop_query_resets_page(contacts in arb_contacts(), query in arb_text(), hops in 0usize..5) {
        let mut store = ContactStore::new(contacts, 3);
        for _ in 0..hops {
            store.next_page();
        }
        store.set_query(query);
        prop_assert_eq!(store.page(), 0);
    }
}

#[test]
fn pager_windows_for_twenty_five_records() {
    let items: Vec<u32> = (0..25).collect();
    let pager = Pager::new(10);

    assert_eq!(pager.window(&items, 0), (0..10).collect::<Vec<_>>().as_slice());
    assert_eq!(pager.window(&items, 2), (20..25).collect::<Vec<_>>().as_slice());
    assert!(pager.window(&items, 3).is_empty());
}
