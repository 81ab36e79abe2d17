use sortable_queue::SortableQueue;

fn main() -> sortable_queue::Result<()> {
    let mut queue = SortableQueue::new();
    dbg!(&queue);

    queue.push_back("banana")?;
    queue.push_back("apple")?;
    queue.push_front("cherry")?;
    queue.push_back("dragonfruit")?;
    queue.push_front("elderberry")?;
    dbg!(&queue);

    queue.sort();
    dbg!(&queue);

    queue.reverse();
    dbg!(&queue);

    let eaten = queue.pop_front();
    dbg!(eaten, queue.len());

    let mut nibble = [0_u8; 4];
    let copied = queue.pop_front_into(&mut nibble)?;
    dbg!(copied, nibble);
    dbg!(&queue);

    Ok(())
}
