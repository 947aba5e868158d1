//! RFC 6902 JSON Patch over `serde_json::Value`.
//!
//! Operations apply in order to a working copy; the target document is only
//! replaced when every operation succeeds.

use serde_json::Value;

use crate::{model::patch::PatchOperationDto, server::error::patch::PatchError};

pub fn apply_patch(doc: &mut Value, operations: &[PatchOperationDto]) -> Result<(), PatchError> {
    let mut working = doc.clone();

    for operation in operations {
        apply_operation(&mut working, operation)?;
    }

    *doc = working;
    Ok(())
}

fn apply_operation(doc: &mut Value, operation: &PatchOperationDto) -> Result<(), PatchError> {
    match operation {
        PatchOperationDto::Add { path, value } => add(doc, path, value.clone()),
        PatchOperationDto::Remove { path } => remove(doc, path).map(|_| ()),
        PatchOperationDto::Replace { path, value } => {
            let target = resolve_mut(doc, &parse_pointer(path)?)
                .ok_or_else(|| PatchError::PathNotFound(path.clone()))?;
            *target = value.clone();
            Ok(())
        }
        PatchOperationDto::Move { from, path } => {
            if path.starts_with(&format!("{}/", from)) {
                return Err(PatchError::MoveIntoChild {
                    from: from.clone(),
                    path: path.clone(),
                });
            }
            let value = remove(doc, from)?;
            add(doc, path, value)
        }
        PatchOperationDto::Copy { from, path } => {
            let value = resolve(doc, &parse_pointer(from)?)
                .cloned()
                .ok_or_else(|| PatchError::PathNotFound(from.clone()))?;
            add(doc, path, value)
        }
        PatchOperationDto::Test { path, value } => {
            match resolve(doc, &parse_pointer(path)?) {
                Some(current) if current == value => Ok(()),
                _ => Err(PatchError::TestFailed(path.clone())),
            }
        }
    }
}

fn add(doc: &mut Value, path: &str, value: Value) -> Result<(), PatchError> {
    let tokens = parse_pointer(path)?;
    let Some((last, parent_tokens)) = tokens.split_last() else {
        *doc = value;
        return Ok(());
    };

    let parent =
        resolve_mut(doc, parent_tokens).ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;

    match parent {
        Value::Object(map) => {
            map.insert(last.clone(), value);
            Ok(())
        }
        Value::Array(items) => {
            if last == "-" {
                items.push(value);
                return Ok(());
            }
            match parse_index(last) {
                Some(index) if index <= items.len() => {
                    items.insert(index, value);
                    Ok(())
                }
                _ => Err(PatchError::PathNotFound(path.to_string())),
            }
        }
        _ => Err(PatchError::PathNotFound(path.to_string())),
    }
}

fn remove(doc: &mut Value, path: &str) -> Result<Value, PatchError> {
    let tokens = parse_pointer(path)?;
    let Some((last, parent_tokens)) = tokens.split_last() else {
        return Err(PatchError::InvalidPointer(path.to_string()));
    };

    let missing = || PatchError::PathNotFound(path.to_string());
    let parent = resolve_mut(doc, parent_tokens).ok_or_else(missing)?;

    match parent {
        Value::Object(map) => map.remove(last).ok_or_else(missing),
        Value::Array(items) => match parse_index(last) {
            Some(index) if index < items.len() => Ok(items.remove(index)),
            _ => Err(missing()),
        },
        _ => Err(missing()),
    }
}

/// Splits a JSON pointer into unescaped reference tokens.
fn parse_pointer(path: &str) -> Result<Vec<String>, PatchError> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = path.strip_prefix('/') else {
        return Err(PatchError::InvalidPointer(path.to_string()));
    };

    Ok(rest
        .split('/')
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect())
}

/// Array indices have no sign and no leading zeros.
fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn resolve<'a>(doc: &'a Value, tokens: &[String]) -> Option<&'a Value> {
    tokens.iter().try_fold(doc, |current, token| match current {
        Value::Object(map) => map.get(token),
        Value::Array(items) => parse_index(token).and_then(|i| items.get(i)),
        _ => None,
    })
}

fn resolve_mut<'a>(doc: &'a mut Value, tokens: &[String]) -> Option<&'a mut Value> {
    tokens.iter().try_fold(doc, |current, token| match current {
        Value::Object(map) => map.get_mut(token),
        Value::Array(items) => parse_index(token).and_then(move |i| items.get_mut(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ops(value: Value) -> Vec<PatchOperationDto> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn replaces_existing_member() {
        let mut doc = json!({ "name": "Old", "moniker": "atl" });

        apply_patch(
            &mut doc,
            &ops(json!([{ "op": "replace", "path": "/name", "value": "New" }])),
        )
        .unwrap();

        assert_eq!(doc, json!({ "name": "New", "moniker": "atl" }));
    }

    #[test]
    fn replace_requires_existing_path() {
        let mut doc = json!({ "name": "Old" });

        let result = apply_patch(
            &mut doc,
            &ops(json!([{ "op": "replace", "path": "/missing", "value": 1 }])),
        );

        assert_eq!(result, Err(PatchError::PathNotFound("/missing".to_string())));
    }

    #[test]
    fn adds_and_removes_array_items() {
        let mut doc = json!({ "tags": ["a", "c"] });

        apply_patch(
            &mut doc,
            &ops(json!([
                { "op": "add", "path": "/tags/1", "value": "b" },
                { "op": "add", "path": "/tags/-", "value": "d" },
                { "op": "remove", "path": "/tags/0" }
            ])),
        )
        .unwrap();

        assert_eq!(doc, json!({ "tags": ["b", "c", "d"] }));
    }

    #[test]
    fn failed_test_leaves_document_untouched() {
        let mut doc = json!({ "name": "Keep" });

        let result = apply_patch(
            &mut doc,
            &ops(json!([
                { "op": "replace", "path": "/name", "value": "Changed" },
                { "op": "test", "path": "/name", "value": "Other" }
            ])),
        );

        assert!(matches!(result, Err(PatchError::TestFailed(_))));
        assert_eq!(doc, json!({ "name": "Keep" }));
    }

    #[test]
    fn moves_and_copies_members() {
        let mut doc = json!({ "a": 1, "b": { "c": 2 } });

        apply_patch(
            &mut doc,
            &ops(json!([
                { "op": "move", "from": "/a", "path": "/b/a" },
                { "op": "copy", "from": "/b/c", "path": "/d" }
            ])),
        )
        .unwrap();

        assert_eq!(doc, json!({ "b": { "a": 1, "c": 2 }, "d": 2 }));
    }

    #[test]
    fn rejects_move_into_own_child() {
        let mut doc = json!({ "a": { "b": 1 } });

        let result = apply_patch(
            &mut doc,
            &ops(json!([{ "op": "move", "from": "/a", "path": "/a/b/c" }])),
        );

        assert!(matches!(result, Err(PatchError::MoveIntoChild { .. })));
    }

    #[test]
    fn unescapes_pointer_tokens() {
        let mut doc = json!({ "a/b": 1, "m~n": 2 });

        apply_patch(
            &mut doc,
            &ops(json!([
                { "op": "replace", "path": "/a~1b", "value": 10 },
                { "op": "remove", "path": "/m~0n" }
            ])),
        )
        .unwrap();

        assert_eq!(doc, json!({ "a/b": 10 }));
    }

    #[test]
    fn rejects_pointer_without_leading_slash() {
        let mut doc = json!({});

        let result = apply_patch(&mut doc, &ops(json!([{ "op": "remove", "path": "name" }])));

        assert_eq!(result, Err(PatchError::InvalidPointer("name".to_string())));
    }
}
