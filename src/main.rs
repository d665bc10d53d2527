use navigable_collections::avl_tree::AvlSet;

fn main() {
    let mut set = AvlSet::new();
    for key in 0..30 {
        set.insert(key);
    }

    let mut cursor = set.cursor();
    while cursor.has_next() {
        let key = cursor.next().unwrap();
        println!("{}", key);
        if key % 3 == 0 {
            cursor.remove().unwrap();
        }
    }

    println!();

    for key in &set {
        println!("{}", key);
    }

    println!();
    println!(
        "len = {}, height = {}, balanced = {}",
        set.len(),
        set.height(),
        set.check_invariant(),
    );
}
