

use std::collections::HashMap;

use tracing::debug;

use crate::profile::{Profile, Role};


/// Store keys starting with `-` are generated push ids, not account ids.
pub fn is_account_key(key: &str) -> bool {
    !key.starts_with('-')
}


fn email_key(profile: &Profile) -> Option<String> {
    profile
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_lowercase)
}


fn fingerprint(profile: &Profile) -> String {
    match email_key(profile) {
        Some(email) => email,
        None => format!(
            "{}_{}",
            profile.name.as_deref().unwrap_or("").to_lowercase(),
            profile.role.as_ref().map_or("", Role::as_str)
        ),
    }
}


fn is_requester(key: &str, profile: &Profile, requester: &Profile) -> bool {
    if key == requester.id {
        return true;
    }
    match (email_key(profile), email_key(requester)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}


/// Builds a de-duplicated candidate pool from keyed store records.
///
/// Records belonging to the requester are dropped. Records describing the same
/// person (same email, or same name and role when no email is set) collapse to
/// one entry, preferring the record stored under an account key. Output order
/// follows the first appearance of each person.
pub fn prepare_pool<I>(requester: &Profile, records: I) -> Vec<Profile>
where
    I: IntoIterator<Item = (String, Profile)>,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut pool: Vec<Profile> = Vec::new();
    let mut seen = 0usize;

    for (key, mut profile) in records {
        seen += 1;

        if is_requester(&key, &profile, requester) {
            continue;
        }

        let account = is_account_key(&key);
        if account || profile.id.is_empty() {
            profile.id = key;
        }

        let person = fingerprint(&profile);
        match slots.get(&person).copied() {
            Some(slot) if account => pool[slot] = profile,
            Some(_) => {}
            None => {
                slots.insert(person, pool.len());
                pool.push(profile);
            }
        }
    }

    debug!("Prepared candidate pool: {} of {} records kept", pool.len(), seen);
    pool
}
