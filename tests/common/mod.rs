//! Shared integration-test scaffolding: a small, deliberately unminimized
//! trie-to-packed-DAWG builder. It never shares suffixes the way a real
//! compiler would; it exists to hand the search engine a dictionary
//! object without depending on any external word list or compiler.

use boggle_board_generator::Dictionary;

const EOL_BIT: u32 = 1 << 8;
const EOW_BIT: u32 = 1 << 9;
const CHILD_SHIFT: u32 = 10;

struct TrieNode {
    letter: u8,
    eow: bool,
    children: Vec<TrieNode>,
}

impl TrieNode {
    fn root() -> Self {
        TrieNode {
            letter: 0,
            eow: false,
            children: Vec::new(),
        }
    }

    fn insert(&mut self, word: &[u8]) {
        let mut node = self;
        for &letter in word {
            let pos = node.children.iter().position(|c| c.letter == letter);
            let idx = match pos {
                Some(i) => i,
                None => {
                    node.children.push(TrieNode {
                        letter,
                        eow: false,
                        children: Vec::new(),
                    });
                    node.children.len() - 1
                }
            };
            node = &mut node.children[idx];
        }
        node.eow = true;
    }
}

/// Lays out one sibling group contiguously, reserving its slots before
/// recursing into any child so child indices are known before the
/// parent words are written back (siblings end up adjacent in memory).
fn emit_siblings(nodes: &mut Vec<u32>, siblings: &[TrieNode]) -> u32 {
    if siblings.is_empty() {
        return 0;
    }
    let start = nodes.len() as u32;
    for _ in siblings {
        nodes.push(0);
    }
    for (i, node) in siblings.iter().enumerate() {
        let child = emit_siblings(nodes, &node.children);
        let mut word = node.letter as u32;
        if i == siblings.len() - 1 {
            word |= EOL_BIT;
        }
        if node.eow {
            word |= EOW_BIT;
        }
        word |= child << CHILD_SHIFT;
        nodes[start as usize + i] = word;
    }
    start
}

/// Packs `words` into a [`Dictionary`] via an unminimized trie. Every
/// word must be uppercase ASCII.
pub fn build_dictionary(words: &[&str]) -> Dictionary {
    let mut root = TrieNode::root();
    for word in words {
        root.insert(word.as_bytes());
    }
    let mut nodes: Vec<u32> = vec![0];
    emit_siblings(&mut nodes, &root.children);
    Dictionary::from_packed(nodes).expect("test dictionary is well-formed")
}
