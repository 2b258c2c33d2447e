//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use ccg_reader::{Category, Tree};

pub const AUTO: &str = "\
ID=wsj_0001.1 PARSER=GOLD NUMPARSE=1
(<T S[dcl] 0 2> (<L NP NNP NNP John NP>) (<T S[dcl]\\NP 0 1> (<L S[dcl]\\NP VBZ VBZ runs S[dcl]\\NP_1>) ) )

ID=wsj_0001.2 PARSER=GOLD NUMPARSE=1
(<L N NNS NNS dogs N>)
";

pub const PTB: &str = "\
(ROOT (NP (N dog)))
(ROOT (S (NP (N I)) (VP (V run))))
";

pub const CANDC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<candc>
  <ccg sentence="1" id="1">
    <rule type="ba" cat="S[dcl]">
      <lf start="0" span="1" word="John" lemma="John" pos="NNP" chunk="I-NP" entity="I-PER" cat="NP"/>
      <lf start="1" span="1" word="runs" lemma="run" pos="VBZ" chunk="I-VP" entity="O" cat="S[dcl]\NP"/>
    </rule>
  </ccg>
  <ccg sentence="2" id="1">
    <rule type="lex" cat="NP">
      <lf start="0" span="1" word="dogs" lemma="dog" pos="NNS" chunk="I-NP" entity="O" cat="N"/>
    </rule>
  </ccg>
</candc>
"#;

pub const JIGG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<root>
  <document id="d0">
    <sentences>
      <sentence id="s0">
        <tokens>
          <token id="t0_0" surf="太郎" pos="名詞" base="太郎"/>
          <token id="t0_1" surf="が" pos="助詞" base="が"/>
        </tokens>
        <ccg id="s0_ccg0" root="s0_sp0">
          <span id="s0_sp0" category="NP[case=ga]" child="s0_sp1 s0_sp2" rule="&lt;"/>
          <span id="s0_sp1" category="NP" terminal="t0_0"/>
          <span id="s0_sp2" category="NP[case=ga]\NP" terminal="t0_1"/>
        </ccg>
      </sentence>
      <sentence id="s1">
        <tokens>
          <token id="t1_0" word="走る" pos="動詞"/>
        </tokens>
        <ccg id="s1_ccg0" root="s1_sp0">
          <span id="s1_sp0" category="S" terminal="t1_0"/>
        </ccg>
      </sentence>
    </sentences>
  </document>
</root>
"#;

pub fn cat(text: &str) -> Category {
    Category::parse(text).unwrap()
}

/// Serializes a tree as a single bracket line, closers attached to the words.
pub fn to_ptb(tree: &Tree) -> String {
    fn write(tree: &Tree, out: &mut String) {
        out.push('(');
        out.push_str(&tree.category().to_string());
        match tree {
            Tree::Terminal { word, .. } => {
                out.push(' ');
                out.push_str(word);
            }
            _ => {
                for child in tree.children() {
                    out.push(' ');
                    write(child, out);
                }
            }
        }
        out.push(')');
    }

    let mut out = String::from("(ROOT ");
    write(tree, &mut out);
    out.push(')');
    out
}
