//! Decoding scenarios
//!
//! Each test feeds a small document through the public codec and checks the resulting tree
//! with assert_tree. Whole documents that are worth keeping live in samples/ and are covered
//! by samples_roundtrip.rs; the strings here are edge cases.

use rstest::rstest;
use yamlet_parser::testing::{assert_tree, Samples};
use yamlet_parser::{decode_str, encode_to_string, Node};

#[rstest]
#[case::empty("")]
#[case::marker_only("---\n")]
#[case::comments_only("---\n# nothing\n   # here\n")]
fn test_documents_without_content_decode_to_empty_root(#[case] source: &str) {
    let root = decode_str(source);
    assert_tree(&root).is_container().child_count(0).no_attributes();
}

#[rstest]
#[case("name: hero", "name", "hero")]
#[case("name:hero", "name", "hero")]
#[case("key :  spaced  ", "key", "spaced")]
#[case("url: http://example.com", "url", "http://example.com")]
#[case("offset: -4", "offset", "-4")]
#[case("stats:", "stats", "")]
#[case("-4", "-4", "")]
#[case("-key: v", "-key", "v")]
#[case("-- x", "-- x", "")]
fn test_single_line_entries(#[case] line: &str, #[case] name: &str, #[case] value: &str) {
    let root = decode_str(&format!("---\n{}\n", line));
    assert_tree(&root).child_count(1).child(0, |entry| {
        entry.name(name).value(value).child_count(0);
    });
}

#[test]
fn test_line_without_separator_is_name_only_entry() {
    let root = decode_str("---\njusttext\n");
    assert_tree(&root).child_count(1).child(0, |entry| {
        entry.name("justtext").value("");
    });
}

#[test]
fn test_leading_dashes_without_space_are_kept() {
    let root = decode_str("---\n-4\n-key: v\n");
    assert_tree(&root)
        .child_count(2)
        .child(0, |number| {
            number.name("-4").value("");
        })
        .child(1, |key| {
            key.name("-key").value("v");
        });
}

#[test]
fn test_blank_lines_become_empty_containers() {
    let root = decode_str("---\n\n   \n");
    assert_tree(&root)
        .child_count(2)
        .child(0, |blank| {
            blank.is_container().child_count(0);
        })
        .child(1, |blank| {
            blank.is_container().child_count(0);
        });
    // Nothing to write for an empty container
    assert_eq!(encode_to_string(&root), "---\n");
}

#[test]
fn test_blank_line_resets_cursor_to_root() {
    let root = decode_str("---\na:\n  b: 1\n\n  c: 2\n");
    assert_tree(&root)
        .child_count(2)
        .child(0, |a| {
            a.name("a").child_count(1).child(0, |b| {
                b.name("b").value("1");
            });
        })
        .child(1, |blank| {
            blank.is_container().child_count(1).child(0, |c| {
                c.name("c").value("2");
            });
        });
}

#[test]
fn test_comment_does_not_move_cursor() {
    let root = decode_str("---\na:\n  b: 1\n# aside\n  c: 2\n");
    assert_tree(&root).child_count(1).child(0, |a| {
        a.name("a")
            .child_count(2)
            .child(0, |b| {
                b.name("b").value("1");
            })
            .child(1, |c| {
                c.name("c").value("2");
            });
    });
}

#[test]
fn test_indentation_jump_inserts_one_filler() {
    let root = decode_str("---\na:\n    deep: 1\n");
    assert_tree(&root)
        .child_count(2)
        .child(0, |a| {
            a.name("a").child_count(0);
        })
        .child(1, |filler| {
            filler.is_container().child_count(1).child(0, |deep| {
                deep.name("deep").value("1");
            });
        });
}

#[test]
fn test_dedent_past_root_stays_at_root() {
    let root = decode_str("---\n  a: 1\nb: 2\n");
    assert_tree(&root)
        .child_count(2)
        .child(0, |a| {
            a.name("a");
        })
        .child(1, |b| {
            b.name("b");
        });
}

#[test]
fn test_odd_indentation_uses_integer_division() {
    // 3 spaces is one level up from 0 but is not exactly one step, so no descent
    let root = decode_str("---\nkey: value\n   odd: 3\n");
    assert_tree(&root).child_count(2).child(1, |odd| {
        odd.name("odd").value("3");
    });
}

#[test]
fn test_crlf_line_endings() {
    let root = decode_str("---\r\nstats:\r\n  hp: 10\r\n");
    assert_tree(&root).child_count(1).child(0, |stats| {
        stats.name("stats").child(0, |hp| {
            hp.name("hp").value("10");
        });
    });
}

#[test]
fn test_attribute_lands_on_enclosing_node() {
    let root = Samples::decode("hero");
    assert_tree(&root)
        .no_attributes()
        .child_count(2)
        .child(0, |name| {
            name.name("name").value("hero").no_attributes();
        })
        .child(1, |stats| {
            stats
                .name("stats")
                .value("")
                .attribute("type", "int")
                .attribute_count(1)
                .child_count(1)
                .child(0, |hp| {
                    hp.name("hp").value("10").no_attributes();
                });
        });
}

#[test]
fn test_hero_reencodes_attributes_first() {
    let root = Samples::decode("hero");
    assert_eq!(
        encode_to_string(&root),
        "---\nname: hero\nstats: \n  _type: int\n  hp: 10\n"
    );
}

#[test]
fn test_attribute_children_are_ignored() {
    let root = decode_str("---\nhp: 10\n  _type: int\n    ignored: 1\n  max: 99\n");
    assert_tree(&root).child_count(1).child(0, |hp| {
        hp.attribute("type", "int").child_count(1).child(0, |max| {
            max.name("max").value("99");
        });
    });
}

#[test]
fn test_leading_attributes_belong_to_root() {
    let root = decode_str("---\n  _version: 2\na: 1\n");
    assert_tree(&root)
        .attribute("version", "2")
        .child_count(1)
        .child(0, |a| {
            a.name("a").no_attributes();
        });
}

#[test]
fn test_sequence_items() {
    let root = Samples::decode("inventory");
    assert_tree(&root)
        .child_count(3)
        .child(1, |items| {
            items
                .name("items")
                .child_count(3)
                .child(0, |sword| {
                    sword.name("").value("sword");
                })
                .child(1, |shield| {
                    shield.name("").value("shield");
                })
                .child(2, |potion| {
                    potion.name("potion").value("3");
                });
        })
        .child(2, |slots| {
            slots.name("slots").child(0, |belt| {
                belt.name("belt").child_count(2).child(1, |torch| {
                    torch.value("torch");
                });
            });
        });
}

#[test]
fn test_scalar_sequence_item_is_not_an_entry() {
    let root = decode_str("---\n- a\n- b\n");
    let expected = Node::container()
        .with_child(Node::scalar("a"))
        .with_child(Node::scalar("b"));
    assert_eq!(root, expected);
    assert_eq!(encode_to_string(&root), "---\n- a\n- b\n");
}
