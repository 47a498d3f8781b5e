pub mod list {
    use serde::de::{SeqAccess, Visitor};
    use serde::ser::Serializer;
    use serde::{Deserialize, Deserializer, Serialize};
    use std::fmt;
    use std::io::{self, Write};
    use std::iter::{FromIterator, IntoIterator};
    use std::marker::PhantomData;
    use std::ptr;
    use thiserror::Error;

    /// 链表操作失败时返回的错误类型
    ///
    /// 只有严格语义的操作（按下标访问、按下标插入）会返回该错误；
    /// 宽容语义的移除操作通过返回值表示"没有元素可移除"，永远不会报错。
    #[derive(Error, Debug, PartialEq, Eq)]
    pub enum ListError {
        #[error("index {index} out of range for list of length {len}")]
        IndexOutOfRange { index: usize, len: usize },
    }

    /// 链表节点，保存一个元素以及前驱、后继两条链接
    ///
    /// 节点由插入操作通过 `Box::into_raw` 在堆上创建，
    /// 由移除操作或整表销毁通过 `Box::from_raw` 释放，每个节点恰好释放一次。
    #[derive(Debug)]
    pub struct Node<T> {
        pub(crate) data: T,
        prev: *mut Node<T>,
        pub(crate) next: *mut Node<T>,
    }

    impl<T> Node<T> {
        /// 获取节点内元素的不可变引用
        pub fn data(&self) -> &T {
            &self.data
        }

        /// 获取节点内元素的可变引用
        pub fn data_mut(&mut self) -> &mut T {
            &mut self.data
        }

        /// 获取后继节点的裸指针，尾节点返回空指针
        pub fn next(&self) -> *mut Node<T> {
            self.next
        }

        /// 获取前驱节点的裸指针，头节点返回空指针
        pub fn prev(&self) -> *mut Node<T> {
            self.prev
        }

        /// 从指定节点开始递归地向尾部访问每个元素
        ///
        /// # 参数
        /// - `node`: 起始节点的裸指针，可以为空（此时不做任何事）
        /// - `visit`: 对每个元素调用一次的回调
        ///
        /// # 安全性
        /// 调用者必须保证 `node` 为空指针或指向某个链表中仍然有效的节点，
        /// 且访问期间链表不被修改。
        ///
        /// # 注意
        /// 递归深度等于从 `node` 到尾部的节点数，大链表请改用迭代器遍历。
        pub unsafe fn visit_forward_recursive<F: FnMut(&T)>(node: *const Node<T>, visit: &mut F) {
            if node.is_null() {
                return;
            }
            unsafe {
                visit(&(*node).data);
                Self::visit_forward_recursive((*node).next, visit);
            }
        }

        /// 从指定节点开始递归地向头部访问每个元素
        ///
        /// # 安全性
        /// 与 [`Node::visit_forward_recursive`] 相同。
        ///
        /// # 注意
        /// 递归深度等于从 `node` 到头部的节点数，大链表请改用 `iter().rev()`。
        pub unsafe fn visit_reverse_recursive<F: FnMut(&T)>(node: *const Node<T>, visit: &mut F) {
            if node.is_null() {
                return;
            }
            unsafe {
                visit(&(*node).data);
                Self::visit_reverse_recursive((*node).prev, visit);
            }
        }
    }

    /// 通用双向链表
    ///
    /// 节点独占地属于一个链表：拷贝通过深拷贝复制元素值，从不共享节点。
    /// 遍历状态只存在于迭代器和局部变量中，链表本身不保存任何游标。
    pub struct DoublyLinkedList<T> {
        pub(crate) head: *mut Node<T>,
        tail: *mut Node<T>,
        len: usize,
        marker: PhantomData<Box<Node<T>>>,
    }

    // 基础实现
    impl<T> DoublyLinkedList<T> {
        /// 构造一个新的空双向链表
        ///
        /// # 返回值
        /// 返回一个初始化为空的 `DoublyLinkedList` 实例，其中：
        /// - `head` / `tail`: 初始化为空指针
        /// - `len`: 初始化为 0
        pub fn new() -> Self {
            DoublyLinkedList {
                head: ptr::null_mut(),
                tail: ptr::null_mut(),
                len: 0,
                marker: PhantomData,
            }
        }

        /// 获取链表当前的元素数量，O(1)
        pub fn len(&self) -> usize {
            self.len
        }

        /// 判断链表是否为空
        pub fn is_empty(&self) -> bool {
            self.len == 0
        }

        /// 在双向链表的头部插入一个新元素
        ///
        /// # 参数
        /// - `data`: 要插入到链表头部的数据
        ///
        /// # 操作逻辑
        /// 1. 在堆上创建新节点，前驱为空，后继指向当前头节点
        /// 2. 如果当前头节点非空，更新其前驱指针为新节点
        /// 3. 如果链表原本为空，同时更新尾指针为新节点
        /// 4. 更新头指针并将长度加 1
        pub fn push_front(&mut self, data: T) {
            let new_node = Box::into_raw(Box::new(Node {
                data,
                prev: ptr::null_mut(),
                next: self.head,
            }));

            if !self.head.is_null() {
                unsafe {
                    (*self.head).prev = new_node;
                }
            } else {
                self.tail = new_node;
            }

            self.head = new_node;
            self.len += 1;
        }

        /// 在双向链表的尾部插入一个新元素
        ///
        /// # 参数
        /// - `data`: 要插入到链表尾部的数据
        ///
        /// # 操作逻辑
        /// 与 [`DoublyLinkedList::push_front`] 镜像：新节点的前驱指向当前尾节点，
        /// 后继为空，必要时同时更新头指针，最后长度加 1。
        pub fn push_back(&mut self, data: T) {
            let new_node = Box::into_raw(Box::new(Node {
                data,
                prev: self.tail,
                next: ptr::null_mut(),
            }));

            if !self.tail.is_null() {
                unsafe {
                    (*self.tail).next = new_node;
                }
            } else {
                self.head = new_node;
            }

            self.tail = new_node;
            self.len += 1;
        }

        /// 将一组元素依次插入链表头部，保持输入顺序
        ///
        /// # 参数
        /// - `values`: 要插入的元素序列，其迭代器必须支持反向遍历
        ///
        /// # 操作逻辑
        /// 内部按反向迭代顺序逐个 `push_front`，因此插入 `[a, b, c]`
        /// 之后链表开头依次是 a、b、c，与输入顺序一致（而不是反转）。
        pub fn push_front_many<I>(&mut self, values: I)
        where
            I: IntoIterator<Item = T>,
            I::IntoIter: DoubleEndedIterator,
        {
            for value in values.into_iter().rev() {
                self.push_front(value);
            }
        }

        /// 将一组元素依次插入链表尾部，保持输入顺序
        pub fn push_back_many<I: IntoIterator<Item = T>>(&mut self, values: I) {
            for value in values {
                self.push_back(value);
            }
        }

        /// 移除并返回链表头部的元素
        ///
        /// # 返回值
        /// - 链表非空时返回 `Some(data)`，`data` 为被移除的头部元素
        /// - 链表为空时返回 `None`，不会报错
        ///
        /// # 操作逻辑
        /// 1. 头指针为空则直接返回 None
        /// 2. 否则用 `Box::from_raw` 收回头节点，头指针后移
        /// 3. 新头节点存在则清空其前驱指针，否则链表已空，同时清空尾指针
        /// 4. 长度减 1，返回原头节点的数据
        pub fn pop_front(&mut self) -> Option<T> {
            if self.head.is_null() {
                return None;
            }

            unsafe {
                let old_head = Box::from_raw(self.head);
                self.head = old_head.next;

                if !self.head.is_null() {
                    (*self.head).prev = ptr::null_mut();
                } else {
                    self.tail = ptr::null_mut();
                }

                self.len -= 1;
                Some(old_head.data)
            }
        }

        /// 移除并返回链表尾部的元素
        ///
        /// # 返回值
        /// - 链表非空时返回 `Some(data)`，`data` 为被移除的尾部元素
        /// - 链表为空时返回 `None`，不会报错
        pub fn pop_back(&mut self) -> Option<T> {
            if self.tail.is_null() {
                return None;
            }

            unsafe {
                let old_tail = Box::from_raw(self.tail);
                self.tail = old_tail.prev;

                if !self.tail.is_null() {
                    (*self.tail).next = ptr::null_mut();
                } else {
                    self.head = ptr::null_mut();
                }

                self.len -= 1;
                Some(old_tail.data)
            }
        }

        /// 获取链表头部元素的引用，链表为空时返回 `None`
        pub fn front(&self) -> Option<&T> {
            if self.head.is_null() {
                None
            } else {
                unsafe { Some(&(*self.head).data) }
            }
        }

        /// 获取链表尾部元素的引用，链表为空时返回 `None`
        pub fn back(&self) -> Option<&T> {
            if self.tail.is_null() {
                None
            } else {
                unsafe { Some(&(*self.tail).data) }
            }
        }

        /// 获取链表头部元素的可变引用，链表为空时返回 `None`
        pub fn front_mut(&mut self) -> Option<&mut T> {
            if self.head.is_null() {
                None
            } else {
                unsafe { Some(&mut (*self.head).data) }
            }
        }

        /// 获取链表尾部元素的可变引用，链表为空时返回 `None`
        pub fn back_mut(&mut self) -> Option<&mut T> {
            if self.tail.is_null() {
                None
            } else {
                unsafe { Some(&mut (*self.tail).data) }
            }
        }

        /// 获取头节点的裸指针，链表为空时返回空指针
        pub fn head_node(&self) -> *mut Node<T> {
            self.head
        }

        /// 获取尾节点的裸指针，链表为空时返回空指针
        pub fn tail_node(&self) -> *mut Node<T> {
            self.tail
        }

        /// 清空链表，释放所有节点并恢复到空表状态
        ///
        /// # 操作逻辑
        /// 通过不断移除头部节点直到链表为空，保证每个节点恰好被释放一次，
        /// 结束后 `len` 为 0、头尾指针均为空。对已经为空的链表调用没有副作用。
        pub fn clear(&mut self) {
            while self.pop_front().is_some() {}
        }

        // 定位 index 处的节点，调用前必须保证 index < len。
        // index 落在前半段时从头向后走，否则从尾向前走，平均遍历距离减半。
        fn locate(&self, index: usize) -> *mut Node<T> {
            debug_assert!(index < self.len);
            if index <= (self.len - 1) / 2 {
                let mut current = self.head;
                for _ in 0..index {
                    unsafe {
                        current = (*current).next;
                    }
                }
                current
            } else {
                let mut current = self.tail;
                for _ in 0..(self.len - 1 - index) {
                    unsafe {
                        current = (*current).prev;
                    }
                }
                current
            }
        }

        /// 获取指定下标处节点的裸指针
        ///
        /// # 参数
        /// - `index`: 从 0 开始的下标，合法范围为 `[0, len)`
        ///
        /// # 返回值
        /// - 下标合法时返回 `Ok(node)`
        /// - 否则返回 `Err(ListError::IndexOutOfRange)`，链表不发生任何变化
        pub fn node_at(&self, index: usize) -> Result<*mut Node<T>, ListError> {
            if index >= self.len {
                return Err(ListError::IndexOutOfRange {
                    index,
                    len: self.len,
                });
            }
            Ok(self.locate(index))
        }

        /// 获取指定下标处元素的不可变引用
        ///
        /// # 参数
        /// - `index`: 从 0 开始的下标，合法范围为 `[0, len)`
        ///
        /// # 返回值
        /// - 下标合法时返回 `Ok(&data)`
        /// - 否则返回 `Err(ListError::IndexOutOfRange)`
        ///
        /// # 操作逻辑
        /// 下标落在前半段时从头向后遍历，否则从尾向前遍历。
        pub fn get(&self, index: usize) -> Result<&T, ListError> {
            let node = self.node_at(index)?;
            unsafe { Ok(&(*node).data) }
        }

        /// 获取指定下标处元素的可变引用，范围语义与 [`DoublyLinkedList::get`] 相同
        pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
            let node = self.node_at(index)?;
            unsafe { Ok(&mut (*node).data) }
        }

        /// 在指定节点之前拼接一个新节点
        ///
        /// # 参数
        /// - `node`: 本链表中某个节点的裸指针，不能为空
        /// - `data`: 新节点的数据
        ///
        /// # 操作逻辑
        /// 新节点接管 `node` 原来的前驱：前驱存在则改写其后继指针，
        /// 不存在说明 `node` 是头节点，新节点成为新的头。最后长度加 1。
        ///
        /// # 安全性
        /// 调用者必须保证 `node` 非空且属于 `self`。传入其他链表的节点
        /// 或已被移除的节点是未定义行为，本函数不做跨链表归属检查。
        pub unsafe fn insert_before(&mut self, node: *mut Node<T>, data: T) {
            debug_assert!(!node.is_null());
            unsafe {
                let prev = (*node).prev;
                let new_node = Box::into_raw(Box::new(Node {
                    data,
                    prev,
                    next: node,
                }));
                (*node).prev = new_node;
                if prev.is_null() {
                    self.head = new_node;
                } else {
                    (*prev).next = new_node;
                }
            }
            self.len += 1;
        }

        /// 在指定节点之后拼接一个新节点
        ///
        /// # 安全性
        /// 与 [`DoublyLinkedList::insert_before`] 相同：`node` 必须非空且属于 `self`。
        pub unsafe fn insert_after(&mut self, node: *mut Node<T>, data: T) {
            debug_assert!(!node.is_null());
            unsafe {
                let next = (*node).next;
                let new_node = Box::into_raw(Box::new(Node {
                    data,
                    prev: node,
                    next,
                }));
                (*node).next = new_node;
                if next.is_null() {
                    self.tail = new_node;
                } else {
                    (*next).prev = new_node;
                }
            }
            self.len += 1;
        }

        /// 在指定下标处插入一个新元素，原下标及之后的元素依次后移
        ///
        /// # 参数
        /// - `data`: 要插入的数据
        /// - `index`: 插入位置，合法范围为 `[0, len]`
        ///
        /// # 返回值
        /// - 成功时返回 `Ok(())`，新元素成为下标 `index` 处的元素
        /// - `index > len` 时返回 `Err(ListError::IndexOutOfRange)`，
        ///   链表不发生任何变化
        ///
        /// # 操作逻辑
        /// `index == 0` 等价于 `push_front`，`index == len` 等价于 `push_back`，
        /// 其余情况定位到当前位于 `index` 处的节点并在其前拼接。
        pub fn insert_at(&mut self, data: T, index: usize) -> Result<(), ListError> {
            if index > self.len {
                return Err(ListError::IndexOutOfRange {
                    index,
                    len: self.len,
                });
            }
            if index == 0 {
                self.push_front(data);
            } else if index == self.len {
                self.push_back(data);
            } else {
                let node = self.locate(index);
                unsafe {
                    self.insert_before(node, data);
                }
            }
            Ok(())
        }

        // 从链表上摘下任意节点并返回其数据，调用前必须保证节点属于本链表。
        unsafe fn unlink(&mut self, node: *mut Node<T>) -> T {
            unsafe {
                let boxed = Box::from_raw(node);

                if boxed.prev.is_null() {
                    self.head = boxed.next;
                } else {
                    (*boxed.prev).next = boxed.next;
                }

                if boxed.next.is_null() {
                    self.tail = boxed.prev;
                } else {
                    (*boxed.next).prev = boxed.prev;
                }

                self.len -= 1;
                boxed.data
            }
        }

        /// 移除并返回指定下标处的元素
        ///
        /// # 参数
        /// - `index`: 从 0 开始的下标
        ///
        /// # 返回值
        /// - 下标合法时返回 `Some(data)`
        /// - `index >= len` 时返回 `None`，不会报错 —— 与 `get` 的严格语义
        ///   不同，"没有元素可移除"是常规结果而不是异常
        pub fn remove_at(&mut self, index: usize) -> Option<T> {
            if index >= self.len {
                return None;
            }
            let node = self.locate(index);
            Some(unsafe { self.unlink(node) })
        }
    }

    // 查找与移除操作
    impl<T: PartialEq> DoublyLinkedList<T> {
        /// 查找第一个等于指定值的元素，返回其不可变引用
        ///
        /// # 返回值
        /// 按正向顺序查找，命中时返回 `Some(&data)`，链表为空或不存在时返回 `None`
        pub fn find(&self, data: &T) -> Option<&T> {
            let node = self.find_node(data);
            if node.is_null() {
                None
            } else {
                unsafe { Some(&(*node).data) }
            }
        }

        /// 查找第一个等于指定值的元素，返回其可变引用，语义与 [`DoublyLinkedList::find`] 相同
        pub fn find_mut(&mut self, data: &T) -> Option<&mut T> {
            let node = self.find_node(data);
            if node.is_null() {
                None
            } else {
                unsafe { Some(&mut (*node).data) }
            }
        }

        /// 查找第一个等于指定值的节点
        ///
        /// # 返回值
        /// 命中时返回节点的裸指针，不存在时返回空指针
        pub fn find_node(&self, data: &T) -> *mut Node<T> {
            let mut current = self.head;
            while !current.is_null() {
                unsafe {
                    if &(*current).data == data {
                        return current;
                    }
                    current = (*current).next;
                }
            }
            ptr::null_mut()
        }

        /// 查找所有等于指定值的节点
        ///
        /// # 返回值
        /// 按正向顺序返回每个匹配节点的裸指针；没有匹配时返回空向量。
        /// 相邻的重复匹配同样会被逐个收集。
        pub fn find_all(&self, data: &T) -> Vec<*mut Node<T>> {
            let mut matches = Vec::new();
            let mut current = self.head;
            while !current.is_null() {
                unsafe {
                    if &(*current).data == data {
                        matches.push(current);
                    }
                    current = (*current).next;
                }
            }
            matches
        }

        /// 移除链表中第一个与指定值相等的元素
        ///
        /// # 参数
        /// - `data`: 要移除的元素的引用
        ///
        /// # 返回值
        /// 找到并移除了匹配节点时返回 `true`，否则返回 `false`
        pub fn remove(&mut self, data: &T) -> bool {
            let node = self.find_node(data);
            if node.is_null() {
                return false;
            }
            unsafe {
                self.unlink(node);
            }
            true
        }

        /// 移除链表中所有与指定值相等的元素
        ///
        /// # 参数
        /// - `data`: 要移除的元素的引用
        ///
        /// # 返回值
        /// 返回成功移除的节点数量
        ///
        /// # 操作逻辑
        /// 单趟遍历：先保存后继指针，再判断当前节点是否匹配，匹配则摘除并
        /// 释放。头尾节点、相邻匹配、整表匹配（退化为空表）以及单元素链表
        /// 都走同一条路径，不存在特殊分支。
        pub fn remove_all(&mut self, data: &T) -> usize {
            let mut count = 0;
            let mut current = self.head;

            while !current.is_null() {
                unsafe {
                    let next = (*current).next;

                    if &(*current).data == data {
                        self.unlink(current);
                        count += 1;
                    }
                    current = next;
                }
            }
            count
        }
    }

    // 诊断输出
    impl<T: fmt::Display> DoublyLinkedList<T> {
        /// 将所有元素按正向顺序逐行写入输出流，仅用于诊断
        pub fn write_forward<W: Write>(&self, out: &mut W) -> io::Result<()> {
            for item in self.iter() {
                writeln!(out, "{}", item)?;
            }
            Ok(())
        }

        /// 将所有元素按反向顺序逐行写入输出流，仅用于诊断
        pub fn write_reverse<W: Write>(&self, out: &mut W) -> io::Result<()> {
            for item in self.iter().rev() {
                writeln!(out, "{}", item)?;
            }
            Ok(())
        }
    }

    // 迭代器实现
    impl<T> DoublyLinkedList<T> {
        /// 创建一个前向不可变迭代器
        ///
        /// # 返回值
        /// 返回 `Iter<'_, T>`，从头到尾产出元素引用；该迭代器同时实现了
        /// `DoubleEndedIterator`，`iter().rev()` 即为从尾到头的反向遍历。
        pub fn iter(&self) -> Iter<'_, T> {
            Iter {
                head: self.head,
                tail: self.tail,
                len: self.len,
                marker: PhantomData,
            }
        }

        /// 创建一个前向可变迭代器，支持 `rev()` 反向遍历
        pub fn iter_mut(&mut self) -> IterMut<'_, T> {
            IterMut {
                head: self.head,
                tail: self.tail,
                len: self.len,
                marker: PhantomData,
            }
        }
    }

    // 前向不可变迭代器
    pub struct Iter<'a, T> {
        head: *mut Node<T>,
        tail: *mut Node<T>,
        len: usize,
        marker: PhantomData<&'a Node<T>>,
    }

    impl<'a, T> Iterator for Iter<'a, T> {
        type Item = &'a T;

        fn next(&mut self) -> Option<Self::Item> {
            if self.len == 0 {
                None
            } else {
                unsafe {
                    let item = &(*self.head).data;
                    self.head = (*self.head).next;
                    self.len -= 1;
                    Some(item)
                }
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.len, Some(self.len))
        }
    }

    impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
        fn next_back(&mut self) -> Option<Self::Item> {
            if self.len == 0 {
                None
            } else {
                unsafe {
                    let item = &(*self.tail).data;
                    self.tail = (*self.tail).prev;
                    self.len -= 1;
                    Some(item)
                }
            }
        }
    }

    impl<T> ExactSizeIterator for Iter<'_, T> {}

    // 前向可变迭代器
    pub struct IterMut<'a, T> {
        head: *mut Node<T>,
        tail: *mut Node<T>,
        len: usize,
        marker: PhantomData<&'a mut Node<T>>,
    }

    impl<'a, T> Iterator for IterMut<'a, T> {
        type Item = &'a mut T;

        fn next(&mut self) -> Option<Self::Item> {
            if self.len == 0 {
                None
            } else {
                unsafe {
                    let item = &mut (*self.head).data;
                    self.head = (*self.head).next;
                    self.len -= 1;
                    Some(item)
                }
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.len, Some(self.len))
        }
    }

    impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
        fn next_back(&mut self) -> Option<Self::Item> {
            if self.len == 0 {
                None
            } else {
                unsafe {
                    let item = &mut (*self.tail).data;
                    self.tail = (*self.tail).prev;
                    self.len -= 1;
                    Some(item)
                }
            }
        }
    }

    impl<T> ExactSizeIterator for IterMut<'_, T> {}

    // 消费迭代器
    pub struct IntoIter<T> {
        list: DoublyLinkedList<T>,
    }

    impl<T> Iterator for IntoIter<T> {
        type Item = T;

        fn next(&mut self) -> Option<Self::Item> {
            self.list.pop_front()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.list.len, Some(self.list.len))
        }
    }

    impl<T> DoubleEndedIterator for IntoIter<T> {
        fn next_back(&mut self) -> Option<Self::Item> {
            self.list.pop_back()
        }
    }

    impl<T> ExactSizeIterator for IntoIter<T> {}

    // 从迭代器创建链表
    impl<T> FromIterator<T> for DoublyLinkedList<T> {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
            let mut list = DoublyLinkedList::new();
            for item in iter {
                list.push_back(item);
            }
            list
        }
    }

    // 追加一组元素到尾部
    impl<T> Extend<T> for DoublyLinkedList<T> {
        fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
            self.push_back_many(iter);
        }
    }

    // 链表转换为消费迭代器
    impl<T> IntoIterator for DoublyLinkedList<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;

        fn into_iter(self) -> Self::IntoIter {
            IntoIter { list: self }
        }
    }

    impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
        type Item = &'a T;
        type IntoIter = Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }

    impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
        type Item = &'a mut T;
        type IntoIter = IterMut<'a, T>;

        fn into_iter(self) -> Self::IntoIter {
            self.iter_mut()
        }
    }

    // 相等比较
    impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
        /// 判断两个链表是否相等
        ///
        /// # 操作逻辑
        /// 长度不同直接不等；长度相同时按正向顺序逐对比较元素。
        /// 两个空链表相等，链表与自身相等。
        fn eq(&self, other: &Self) -> bool {
            self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
        }
    }

    impl<T: Eq> Eq for DoublyLinkedList<T> {}

    // 格式化输出
    impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_list().entries(self.iter()).finish()
        }
    }

    // 清理资源
    impl<T> Drop for DoublyLinkedList<T> {
        /// 析构逻辑：不断移除头部节点直到链表为空
        ///
        /// 迭代释放而不是递归释放，析构的栈深度与链表长度无关。
        fn drop(&mut self) {
            while self.pop_front().is_some() {}
        }
    }

    // 克隆实现
    impl<T: Clone> Clone for DoublyLinkedList<T> {
        /// 创建链表的深拷贝副本
        ///
        /// # 操作逻辑
        /// 遍历原链表并克隆每个元素值，收集为一个全新的链表，
        /// 副本与原链表不共享任何节点。
        fn clone(&self) -> Self {
            self.iter().cloned().collect()
        }

        /// 用 `source` 的深拷贝覆盖 `self`：先释放自身全部节点，再逐个克隆
        fn clone_from(&mut self, source: &Self) {
            self.clear();
            self.extend(source.iter().cloned());
        }
    }

    // 默认实现
    impl<T> Default for DoublyLinkedList<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    // 序列化实现：链表按元素序列序列化，反序列化时按 push_back 重建
    impl<T: Serialize> Serialize for DoublyLinkedList<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for DoublyLinkedList<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct ListVisitor<T>(PhantomData<T>);

            impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
                type Value = DoublyLinkedList<T>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a sequence of list elements")
                }

                fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                    let mut list = DoublyLinkedList::new();
                    while let Some(item) = seq.next_element()? {
                        list.push_back(item);
                    }
                    Ok(list)
                }
            }

            deserializer.deserialize_seq(ListVisitor(PhantomData))
        }
    }

}
