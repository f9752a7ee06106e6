// SPDX-License-Identifier: MPL-2.0
//! Page texts derived from [`InvitationInfo`].
//!
//! Every value the page shows is computed once here. A missing key renders as
//! empty text; the set of keys that were missing is logged once per build.

use super::InvitationInfo;
use std::collections::BTreeSet;
use std::fmt;

/// Which family a person belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Groom,
    Bride,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Groom, Side::Bride];

    fn key(self) -> &'static str {
        match self {
            Side::Groom => "groom",
            Side::Bride => "bride",
        }
    }
}

/// Position of a person within one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Person {
    Father,
    Mother,
    /// The groom or bride themself.
    Principal,
}

impl Person {
    /// Display order of the account panels.
    pub const ACCOUNT_ORDER: [Person; 3] = [Person::Father, Person::Mother, Person::Principal];

    /// Display order of the contact popup.
    pub const CONTACT_ORDER: [Person; 3] = [Person::Principal, Person::Father, Person::Mother];

    fn key(self) -> &'static str {
        match self {
            Person::Father => "father",
            Person::Mother => "mother",
            Person::Principal => "self",
        }
    }
}

/// A side and person pair, e.g. the bride's mother.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Role {
    pub side: Side,
    pub person: Person,
}

impl Role {
    #[must_use]
    pub const fn new(side: Side, person: Person) -> Self {
        Self { side, person }
    }

    /// Key prefix in the info file, e.g. `bride_mother`.
    #[must_use]
    pub fn key_prefix(&self) -> String {
        format!("{}_{}", self.side.key(), self.person.key())
    }

    /// The i18n key of the localized role label ("Groom's father", ...).
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match (self.side, self.person) {
            (Side::Groom, Person::Principal) => "role-groom",
            (Side::Groom, Person::Father) => "role-groom-father",
            (Side::Groom, Person::Mother) => "role-groom-mother",
            (Side::Bride, Person::Principal) => "role-bride",
            (Side::Bride, Person::Father) => "role-bride-father",
            (Side::Bride, Person::Mother) => "role-bride-mother",
        }
    }
}

/// URI scheme of a contact link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScheme {
    Tel,
    Sms,
}

/// A `tel:` or `sms:` link to a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub scheme: LinkScheme,
    pub number: String,
}

impl ContactLink {
    #[must_use]
    pub fn tel(number: &str) -> Self {
        Self {
            scheme: LinkScheme::Tel,
            number: number.to_string(),
        }
    }

    #[must_use]
    pub fn sms(number: &str) -> Self {
        Self {
            scheme: LinkScheme::Sms,
            number: number.to_string(),
        }
    }

    /// Returns `false` when there is no number to dial.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.number.is_empty()
    }
}

impl fmt::Display for ContactLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = match self.scheme {
            LinkScheme::Tel => "tel",
            LinkScheme::Sms => "sms",
        };
        write!(f, "{}:{}", scheme, self.number)
    }
}

/// Top section: couple names, date and venue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainText {
    pub groom_name: String,
    pub bride_name: String,
    pub date_time: String,
    pub hall: String,
}

/// One side of the family section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyText {
    pub name: String,
    pub father: String,
    pub mother: String,
}

/// One person in the contact popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub role: Role,
    pub name: String,
    pub call: ContactLink,
    pub sms: ContactLink,
}

/// Venue name, address and phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationText {
    pub hall_name: String,
    pub address: String,
    pub call: ContactLink,
}

/// One bank account row inside an accordion panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEntry {
    pub role: Role,
    pub name: String,
    pub bank: String,
    pub number: String,
}

impl AccountEntry {
    /// `"{bank} {number}"`, trimmed.
    #[must_use]
    pub fn number_line(&self) -> String {
        format!("{} {}", self.bank, self.number).trim().to_string()
    }

    /// Text placed on the clipboard by the copy button.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        self.number_line()
    }

    /// `"{label} {name}"`, trimmed, where `label` is the localized role.
    #[must_use]
    pub fn display_name(&self, label: &str) -> String {
        format!("{} {}", label, self.name).trim().to_string()
    }
}

/// Every text the page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub main: MainText,
    pub groom_family: FamilyText,
    pub bride_family: FamilyText,
    pub contacts: Vec<ContactEntry>,
    pub location: LocationText,
    pub accounts: Vec<AccountEntry>,
}

impl Default for PageText {
    fn default() -> Self {
        Self::from_info(&InvitationInfo::default())
    }
}

/// Tracks keys that were read but absent.
struct Lookup<'a> {
    info: &'a InvitationInfo,
    missing: BTreeSet<String>,
}

impl<'a> Lookup<'a> {
    fn new(info: &'a InvitationInfo) -> Self {
        Self {
            info,
            missing: BTreeSet::new(),
        }
    }

    fn value(&mut self, key: &str) -> String {
        match self.info.get(key) {
            Some(value) => value.to_string(),
            None => {
                self.missing.insert(key.to_string());
                String::new()
            }
        }
    }

    /// First non-empty value among `keys`. Records every key when none has one.
    fn first_of(&mut self, keys: &[String]) -> String {
        if let Some(value) = keys
            .iter()
            .filter_map(|key| self.info.get(key))
            .find(|value| !value.is_empty())
        {
            return value.to_string();
        }
        for key in keys {
            if self.info.get(key).is_none() {
                self.missing.insert(key.clone());
            }
        }
        String::new()
    }

    fn joined(&mut self, first: &str, second: &str) -> String {
        let a = self.value(first);
        let b = self.value(second);
        format!("{} {}", a, b).trim().to_string()
    }
}

impl PageText {
    /// Builds the page texts. Missing keys render empty and are logged once.
    #[must_use]
    pub fn from_info(info: &InvitationInfo) -> Self {
        let mut lookup = Lookup::new(info);

        let main = MainText {
            groom_name: lookup.value("groom_self_name"),
            bride_name: lookup.value("bride_self_name"),
            date_time: lookup.joined("wedding_date", "wedding_time"),
            hall: lookup.joined("wedding_hall_name", "wedding_hall_name2"),
        };

        let groom_family = family(&mut lookup, Side::Groom);
        let bride_family = family(&mut lookup, Side::Bride);

        let contacts = Side::ALL
            .iter()
            .flat_map(|&side| Person::CONTACT_ORDER.map(|person| Role::new(side, person)))
            .map(|role| {
                let prefix = role.key_prefix();
                let phone = lookup.value(&format!("{}_phone", prefix));
                ContactEntry {
                    role,
                    name: lookup.value(&format!("{}_name", prefix)),
                    call: ContactLink::tel(&phone),
                    sms: ContactLink::sms(&phone),
                }
            })
            .collect();

        let location = LocationText {
            hall_name: lookup.value("wedding_hall_name"),
            address: lookup.value("wedding_hall_address"),
            call: ContactLink::tel(&lookup.value("wedding_hall_tel")),
        };

        let accounts = Side::ALL
            .iter()
            .flat_map(|&side| Person::ACCOUNT_ORDER.map(|person| Role::new(side, person)))
            .map(|role| account(&mut lookup, role))
            .collect();

        if !lookup.missing.is_empty() {
            let keys: Vec<&str> = lookup.missing.iter().map(String::as_str).collect();
            log::warn!("info file is missing keys: {}", keys.join(", "));
        }

        Self {
            main,
            groom_family,
            bride_family,
            contacts,
            location,
            accounts,
        }
    }

    /// Account rows of one side, in panel order.
    pub fn accounts_of(&self, side: Side) -> impl Iterator<Item = &AccountEntry> {
        self.accounts.iter().filter(move |entry| entry.role.side == side)
    }

    /// Family text of one side.
    #[must_use]
    pub fn family_of(&self, side: Side) -> &FamilyText {
        match side {
            Side::Groom => &self.groom_family,
            Side::Bride => &self.bride_family,
        }
    }
}

fn family(lookup: &mut Lookup<'_>, side: Side) -> FamilyText {
    let name = |person: Person| format!("{}_name", Role::new(side, person).key_prefix());
    FamilyText {
        name: lookup.value(&name(Person::Principal)),
        father: lookup.value(&name(Person::Father)),
        mother: lookup.value(&name(Person::Mother)),
    }
}

fn account(lookup: &mut Lookup<'_>, role: Role) -> AccountEntry {
    let prefix = role.key_prefix();
    let side = role.side.key();
    let chain = |suffix: &str| [format!("{}_{}", prefix, suffix), format!("{}_{}", side, suffix)];

    AccountEntry {
        role,
        name: lookup.first_of(&chain("name")),
        bank: lookup.first_of(&chain("account_bank")),
        number: lookup.first_of(&chain("account_number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
groom_self_name: Minjun
bride_self_name: Seoyeon
groom_father_name: Jaeho
groom_mother_name: Eunji
bride_father_name: Dongwook
bride_mother_name: Hyejin
wedding_date: 2026-05-16 (Sat)
wedding_time: 12:30 PM
wedding_hall_name: Grand Hall
wedding_hall_name2: 3F
wedding_hall_address: 1 River Road, Seoul
wedding_hall_tel: 02-123-4567
groom_self_phone: 010-1111-2222
bride_mother_phone: 010-3333-4444
groom_account_bank: Shinhan
groom_account_number: 110-222-333
groom_father_account_bank: KB
groom_father_account_number: 9-8-7
";

    fn page() -> PageText {
        PageText::from_info(&InvitationInfo::parse(SAMPLE))
    }

    fn account_for(page: &PageText, side: Side, person: Person) -> &AccountEntry {
        page.accounts
            .iter()
            .find(|a| a.role == Role::new(side, person))
            .expect("account row should exist")
    }

    #[test]
    fn main_section_joins_date_and_hall() {
        let page = page();
        assert_eq!(page.main.groom_name, "Minjun");
        assert_eq!(page.main.date_time, "2026-05-16 (Sat) 12:30 PM");
        assert_eq!(page.main.hall, "Grand Hall 3F");
    }

    #[test]
    fn missing_values_render_empty() {
        let page = PageText::from_info(&InvitationInfo::default());
        assert_eq!(page.main.date_time, "");
        assert_eq!(page.main.hall, "");
        assert_eq!(page.groom_family, FamilyText::default());
        assert!(page.accounts.iter().all(|a| a.number_line().is_empty()));
    }

    #[test]
    fn contacts_carry_tel_and_sms_links() {
        let page = page();
        assert_eq!(page.contacts.len(), 6);
        let groom = &page.contacts[0];
        assert_eq!(groom.role, Role::new(Side::Groom, Person::Principal));
        assert_eq!(groom.call.to_string(), "tel:010-1111-2222");
        assert_eq!(groom.sms.to_string(), "sms:010-1111-2222");

        let bride_mother = page
            .contacts
            .iter()
            .find(|c| c.role == Role::new(Side::Bride, Person::Mother))
            .expect("bride mother contact");
        assert_eq!(bride_mother.name, "Hyejin");
        assert_eq!(bride_mother.sms.to_string(), "sms:010-3333-4444");
    }

    #[test]
    fn contact_without_phone_is_unavailable() {
        let page = page();
        let groom_father = page
            .contacts
            .iter()
            .find(|c| c.role == Role::new(Side::Groom, Person::Father))
            .expect("groom father contact");
        assert!(!groom_father.call.is_available());
    }

    #[test]
    fn location_links_hall_phone() {
        let page = page();
        assert_eq!(page.location.address, "1 River Road, Seoul");
        assert_eq!(page.location.call.to_string(), "tel:02-123-4567");
    }

    #[test]
    fn account_prefers_person_specific_values() {
        let page = page();
        let father = account_for(&page, Side::Groom, Person::Father);
        assert_eq!(father.name, "Jaeho");
        assert_eq!(father.number_line(), "KB 9-8-7");
    }

    #[test]
    fn account_falls_back_to_side_values() {
        let page = page();
        let mother = account_for(&page, Side::Groom, Person::Mother);
        assert_eq!(mother.name, "Eunji");
        assert_eq!(mother.clipboard_text(), "Shinhan 110-222-333");
    }

    #[test]
    fn empty_specific_value_falls_through() {
        let info = InvitationInfo::parse("bride_self_account_bank:\nbride_account_bank: Woori");
        let page = PageText::from_info(&info);
        let bride = account_for(&page, Side::Bride, Person::Principal);
        assert_eq!(bride.bank, "Woori");
        assert_eq!(bride.number_line(), "Woori");
    }

    #[test]
    fn display_name_trims_missing_name() {
        let page = PageText::from_info(&InvitationInfo::default());
        let entry = account_for(&page, Side::Bride, Person::Father);
        assert_eq!(entry.display_name("Bride's father"), "Bride's father");
    }

    #[test]
    fn accounts_are_grouped_by_side_in_panel_order() {
        let page = page();
        let roles: Vec<Person> = page.accounts_of(Side::Bride).map(|a| a.role.person).collect();
        assert_eq!(roles, Person::ACCOUNT_ORDER.to_vec());
    }

    #[test]
    fn label_keys_are_distinct() {
        let keys: BTreeSet<&str> = Side::ALL
            .iter()
            .flat_map(|&s| Person::ACCOUNT_ORDER.map(|p| Role::new(s, p).label_key()))
            .collect();
        assert_eq!(keys.len(), 6);
    }
}
