//! The list exercise's acceptance scenarios, runnable outside the test harness.

use arrlist_mem::{ArrayList, OutOfRange, nth_largest};
use arrlist_error::{Context, Error, Result};

pub type Scenario = fn() -> Result<String>;

pub const SCENARIOS: [(&str, Scenario); 7] = [
    ("nth largest", second_largest),
    ("reverse", reverse),
    ("take", take),
    ("drop", drop),
    ("mid", mid),
    ("empty list", empty_list_rejects),
    ("copy", copy_is_independent),
];

fn appended(values: &[i32]) -> ArrayList<i32> {
    let mut list = ArrayList::new();
    for &x in values {
        list.add(x);
    }
    list
}

#[track_caller]
fn expect_eq(what: &str, got: &ArrayList<i32>, want: &[i32]) -> Result<()> {
    if got.as_slice() != want {
        return Err(Error::just_context_tracked(format_args!(
            "{}: got {}, expected {:?}", what, got, want
        )))
    }
    Ok(())
}

pub fn second_largest() -> Result<String> {
    let a = appended(&[18, 8, 2, 5, 6, 3, 4]);
    let sorted = a.nth_largest(2).ctx_err("sorted-copy nth largest")?;
    let ordered = nth_largest(2, &a).ctx_err("ordered-list nth largest")?;
    if sorted != ordered || sorted != 8 {
        return Err(Error::just_context_tracked(format_args!(
            "second largest of {} was {} (ordered list: {})", a, sorted, ordered
        )))
    }
    Ok(format!("second largest of {} is {}", a, sorted))
}

pub fn reverse() -> Result<String> {
    let a = appended(&[1, 3, 2]);
    let b = a.reverse();
    expect_eq("reverse", &b, &[2, 3, 1])?;
    let third = b.get(2).ctx_err("third element of the reversed list")?;
    Ok(format!("{} reversed is {}, third element {}", a, b, third))
}

pub fn take() -> Result<String> {
    let a = appended(&[1, 3, 2, 5, 6, 7, 4]);
    let b = a.take(6).ctx_err("take(6)")?;
    expect_eq("take(6)", &b, &[1, 3, 2, 5, 6, 7])?;
    Ok(format!("take(6) of {} is {} (size {})", a, b, b.size()))
}

pub fn drop() -> Result<String> {
    let a = appended(&[1, 3, 2, 5, 6, 7, 4, 23, 18]);
    let b = a.drop(6).ctx_err("drop(6)")?;
    expect_eq("drop(6)", &b, &[4, 23, 18])?;
    Ok(format!("drop(6) of {} is {} (size {})", a, b, b.size()))
}

pub fn mid() -> Result<String> {
    let a = appended(&[1, 3, 2, 5, 6, 7, 4]);
    let b = a.mid(2, 3).ctx_err("mid(2, 3)")?;
    expect_eq("mid(2, 3)", &b, &[2, 5, 6])?;
    Ok(format!("mid(2, 3) of {} is {} (size {})", a, b, b.size()))
}

pub fn empty_list_rejects() -> Result<String> {
    let mut l: ArrayList<i32> = ArrayList::new();
    let removed = match l.remove(0) {
        Err(err @ OutOfRange::Position { .. }) => err,
        other => {
            return Err(Error::just_context_tracked(format_args!(
                "remove(0) on an empty list returned {:?}", other
            )))
        },
    };
    arrlist_log::warn!("caught: {}", removed);
    let set = match l.set(0, 1) {
        Err(err @ OutOfRange::Position { .. }) => err,
        other => {
            return Err(Error::just_context_tracked(format_args!(
                "set(0, 1) on an empty list returned {:?}", other
            )))
        },
    };
    arrlist_log::warn!("caught: {}", set);
    Ok(format!("empty list rejected remove and set with \"{}\"", removed))
}

pub fn copy_is_independent() -> Result<String> {
    let a = appended(&[1, 3, 2]);
    let mut c = a.clone();
    c.add(4);
    let mut d = ArrayList::new();
    d.clone_from(&a);
    d.set(0, 10).ctx_err("overwriting the assigned copy")?;
    expect_eq("source after mutating copies", &a, &[1, 3, 2])?;
    Ok(format!("source {} unchanged by copies {} and {}", a, c, d))
}

/// Runs every scenario in order, stopping at the first failure.
pub fn run() -> Result<usize> {
    for (name, scenario) in SCENARIOS {
        let line = scenario().map_err(|err| {
            arrlist_log::debug!("scenario {} failed: {:?}", name, err);
            err
        })?;
        arrlist_log::info!("{}: {}", name, line);
    }
    Ok(SCENARIOS.len())
}
