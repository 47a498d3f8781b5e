pub mod ffi {
    use crate::other_list::{DoublyLinkedList, Node};
    use std::os::raw::{c_int, c_void};
    use std::ptr;

    // 不透明指针类型，对C完全隐藏实现细节
    #[repr(C)]
    pub struct CDoublyLinkedList {
        inner: DoublyLinkedList<*mut c_void>,
    }

    // 迭代器结构，用于C端遍历
    #[repr(C)]
    pub struct CIterator {
        current: *mut Node<*mut c_void>,
    }

    // 错误码定义
    pub const DLL_SUCCESS: c_int = 0;
    pub const DLL_ERROR_NULL_PTR: c_int = -1;
    pub const DLL_ERROR_EMPTY: c_int = -2;
    pub const DLL_ERROR_OUT_OF_BOUNDS: c_int = -3;

    /// 创建一个新的C语言接口可用的双向链表实例
    ///
    /// 返回值:
    /// - 返回指向CDoublyLinkedList实例的裸指针，该实例内部包含一个空链表。
    ///   使用完毕后必须调用[dll_free]释放。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_new() -> *mut CDoublyLinkedList {
        Box::into_raw(Box::new(CDoublyLinkedList {
            inner: DoublyLinkedList::new(),
        }))
    }

    /// 释放由[dll_new]创建的双向链表实例
    ///
    /// 参数:
    /// - `list`: 指向CDoublyLinkedList实例的裸指针，该实例将被释放。
    ///
    /// 注意:
    /// - 链表只负责释放自身节点，节点中存放的`void*`数据由调用方管理。
    /// - 若指针为空则不执行任何操作。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_free(list: *mut CDoublyLinkedList) {
        if !list.is_null() {
            unsafe {
                let _ = Box::from_raw(list);
            }
        }
    }

    /// 获取双向链表的当前元素数量
    ///
    /// 参数:
    /// - `list`: 指向CDoublyLinkedList实例的常量裸指针。
    ///
    /// 返回值:
    /// - 返回链表中元素的数量，输入指针为空时返回0。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_len(list: *const CDoublyLinkedList) -> usize {
        if list.is_null() {
            0
        } else {
            unsafe { (*list).inner.len() }
        }
    }

    /// 检查双向链表是否为空
    ///
    /// 返回值:
    /// - 输入指针为空时返回`DLL_ERROR_NULL_PTR`；
    /// - 否则返回1表示空链表，0表示非空。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_is_empty(list: *const CDoublyLinkedList) -> c_int {
        if list.is_null() {
            DLL_ERROR_NULL_PTR
        } else {
            unsafe { (*list).inner.is_empty() as c_int }
        }
    }

    /// 在双向链表的前端插入一个元素
    ///
    /// 参数:
    /// - `list`: 指向CDoublyLinkedList实例的可变裸指针。
    /// - `data`: 要插入的数据指针，链表不会解引用它。
    ///
    /// 返回值:
    /// - `list`为空时返回`DLL_ERROR_NULL_PTR`，否则返回`DLL_SUCCESS`。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_push_front(list: *mut CDoublyLinkedList, data: *mut c_void) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }

        unsafe {
            (*list).inner.push_front(data);
        }
        DLL_SUCCESS
    }

    /// 在双向链表的尾端插入一个元素
    ///
    /// 参数与返回值约定同[dll_push_front]。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_push_back(list: *mut CDoublyLinkedList, data: *mut c_void) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }

        unsafe {
            (*list).inner.push_back(data);
        }
        DLL_SUCCESS
    }

    /// 从双向链表的前端移除并返回一个元素
    ///
    /// 返回值:
    /// - 返回被移除节点中保存的数据指针；
    /// - 输入指针为空或链表为空时返回空指针。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_pop_front(list: *mut CDoublyLinkedList) -> *mut c_void {
        if list.is_null() {
            return ptr::null_mut();
        }

        unsafe { (*list).inner.pop_front().unwrap_or(ptr::null_mut()) }
    }

    /// 从双向链表的尾端移除并返回一个元素
    ///
    /// 返回值约定同[dll_pop_front]。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_pop_back(list: *mut CDoublyLinkedList) -> *mut c_void {
        if list.is_null() {
            return ptr::null_mut();
        }

        unsafe { (*list).inner.pop_back().unwrap_or(ptr::null_mut()) }
    }

    /// 获取双向链表前端元素保存的数据指针，不移除节点
    ///
    /// 返回值:
    /// - 输入指针为空或链表为空时返回空指针。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_front(list: *const CDoublyLinkedList) -> *mut c_void {
        if list.is_null() {
            return ptr::null_mut();
        }

        unsafe { (*list).inner.front().copied().unwrap_or(ptr::null_mut()) }
    }

    /// 获取双向链表尾端元素保存的数据指针，不移除节点
    ///
    /// 返回值约定同[dll_front]。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_back(list: *const CDoublyLinkedList) -> *mut c_void {
        if list.is_null() {
            return ptr::null_mut();
        }

        unsafe { (*list).inner.back().copied().unwrap_or(ptr::null_mut()) }
    }

    /// 获取双向链表前端存储槽本身的可变指针
    ///
    /// 返回值:
    /// - 输入指针为空或链表为空时返回空指针；
    /// - 否则返回指向前端节点内数据槽的指针，可用于原地改写。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_front_mut(list: *mut CDoublyLinkedList) -> *mut c_void {
        unsafe {
            list.as_mut()
                .and_then(|list| list.inner.front_mut())
                .map(|slot| slot as *mut _ as *mut c_void)
                .unwrap_or(ptr::null_mut())
        }
    }

    /// 获取双向链表尾端存储槽本身的可变指针
    ///
    /// 返回值约定同[dll_front_mut]。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_back_mut(list: *mut CDoublyLinkedList) -> *mut c_void {
        unsafe {
            list.as_mut()
                .and_then(|list| list.inner.back_mut())
                .map(|slot| slot as *mut _ as *mut c_void)
                .unwrap_or(ptr::null_mut())
        }
    }

    /// 获取指定下标处元素保存的数据指针
    ///
    /// 参数:
    /// - `list`: 指向CDoublyLinkedList实例的常量裸指针。
    /// - `index`: 从0开始的下标。
    /// - `out`: 输出参数，成功时写入数据指针。
    ///
    /// 返回值:
    /// - `list`或`out`为空时返回`DLL_ERROR_NULL_PTR`；
    /// - 下标越界时返回`DLL_ERROR_OUT_OF_BOUNDS`，`out`不被写入；
    /// - 成功时返回`DLL_SUCCESS`。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_get(
        list: *const CDoublyLinkedList,
        index: usize,
        out: *mut *mut c_void,
    ) -> c_int {
        if list.is_null() || out.is_null() {
            return DLL_ERROR_NULL_PTR;
        }

        unsafe {
            match (*list).inner.get(index) {
                Ok(data) => {
                    *out = *data;
                    DLL_SUCCESS
                }
                Err(_) => DLL_ERROR_OUT_OF_BOUNDS,
            }
        }
    }

    /// 在指定下标处插入一个元素，原下标及之后的元素依次后移
    ///
    /// 参数:
    /// - `index`: 插入位置，`index`等于链表长度时等价于尾插。
    ///
    /// 返回值:
    /// - `list`为空时返回`DLL_ERROR_NULL_PTR`；
    /// - `index`大于链表长度时返回`DLL_ERROR_OUT_OF_BOUNDS`，链表不变；
    /// - 成功时返回`DLL_SUCCESS`。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_insert_at(
        list: *mut CDoublyLinkedList,
        data: *mut c_void,
        index: usize,
    ) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }

        unsafe {
            match (*list).inner.insert_at(data, index) {
                Ok(()) => DLL_SUCCESS,
                Err(_) => DLL_ERROR_OUT_OF_BOUNDS,
            }
        }
    }

    /// 移除指定下标处的元素并返回其数据指针
    ///
    /// 返回值:
    /// - 返回被移除节点中保存的数据指针，调用方负责释放它指向的内存；
    /// - `list`为空或下标越界时返回空指针，链表不变。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_remove_at(list: *mut CDoublyLinkedList, index: usize) -> *mut c_void {
        if list.is_null() {
            return ptr::null_mut();
        }

        unsafe { (*list).inner.remove_at(index).unwrap_or(ptr::null_mut()) }
    }

    /// 移除所有保存了指定数据指针的节点
    ///
    /// 参数:
    /// - `data`: 要移除的数据指针，按指针值比较。
    ///
    /// 返回值:
    /// - 返回被移除的节点数量，`list`为空时返回0。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_remove_all(list: *mut CDoublyLinkedList, data: *mut c_void) -> usize {
        if list.is_null() {
            return 0;
        }

        unsafe { (*list).inner.remove_all(&data) }
    }

    /// 清空链表，释放所有节点
    ///
    /// 注意:
    /// - 节点中保存的`void*`数据不会被释放，调用方应先遍历取回。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_clear(list: *mut CDoublyLinkedList) -> c_int {
        if list.is_null() {
            return DLL_ERROR_NULL_PTR;
        }

        unsafe {
            (*list).inner.clear();
        }
        DLL_SUCCESS
    }

    /// 获取双向链表的C语言接口兼容迭代器
    ///
    /// 返回值:
    /// - `list`为空时返回空指针；
    /// - 否则返回指向CIterator的裸指针，初始指向链表第一个节点，
    ///   使用完毕后必须调用[dll_iter_free]释放。
    ///
    /// 注意:
    /// - 迭代期间不得修改链表，否则迭代器保存的节点指针会失效。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_into_iter(list: *mut CDoublyLinkedList) -> *mut CIterator {
        if list.is_null() {
            return ptr::null_mut();
        }

        Box::into_raw(Box::new(CIterator {
            current: unsafe { (*list).inner.head },
        }))
    }

    /// 获取迭代器当前位置的元素并移动到下一个节点
    ///
    /// 返回值:
    /// - `iter`为空或已到达末尾时返回空指针；
    /// - 否则返回当前节点中保存的数据指针。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_iter_next(iter: *mut CIterator) -> *mut c_void {
        if iter.is_null() {
            return ptr::null_mut();
        }

        unsafe {
            if (*iter).current.is_null() {
                // 迭代器已经到达末尾
                ptr::null_mut()
            } else {
                let current_node = &*(*iter).current;
                let data = current_node.data;
                (*iter).current = current_node.next;
                data
            }
        }
    }

    /// 释放由[dll_into_iter]创建的迭代器
    ///
    /// 注意:
    /// - 若指针为空则不执行任何操作。
    #[unsafe(no_mangle)]
    pub extern "C" fn dll_iter_free(iter: *mut CIterator) {
        if !iter.is_null() {
            unsafe {
                let _ = Box::from_raw(iter);
            }
        }
    }

    // 测试代码
    #[cfg(test)]
    mod tests {
        use super::*;

        fn boxed(value: i32) -> *mut c_void {
            Box::into_raw(Box::new(value)) as *mut c_void
        }

        unsafe fn unboxed(ptr: *mut c_void) -> i32 {
            unsafe { *Box::from_raw(ptr as *mut i32) }
        }

        // 基本的压入弹出流程
        #[test]
        fn test_ffi_push_pop() {
            let list = dll_new();
            assert_eq!(dll_is_empty(list), 1);
            assert_eq!(dll_push_back(list, boxed(2)), DLL_SUCCESS);
            assert_eq!(dll_push_front(list, boxed(1)), DLL_SUCCESS);
            assert_eq!(dll_push_back(list, boxed(3)), DLL_SUCCESS);
            assert_eq!(dll_len(list), 3);
            assert_eq!(dll_is_empty(list), 0);

            unsafe {
                assert_eq!(unboxed(dll_pop_front(list)), 1);
                assert_eq!(unboxed(dll_pop_back(list)), 3);
                assert_eq!(unboxed(dll_pop_front(list)), 2);
            }
            assert!(dll_pop_front(list).is_null());
            dll_free(list);
        }

        // 空指针一律报错而不是崩溃
        #[test]
        fn test_ffi_null_arguments() {
            let null_list: *mut CDoublyLinkedList = ptr::null_mut();
            assert_eq!(dll_len(null_list), 0);
            assert_eq!(dll_is_empty(null_list), DLL_ERROR_NULL_PTR);
            assert_eq!(dll_push_front(null_list, ptr::null_mut()), DLL_ERROR_NULL_PTR);
            assert!(dll_pop_back(null_list).is_null());
            assert!(dll_into_iter(null_list).is_null());
            assert_eq!(dll_clear(null_list), DLL_ERROR_NULL_PTR);
            dll_free(null_list);
            dll_iter_free(ptr::null_mut());
        }

        #[test]
        fn test_ffi_get_and_insert_at() {
            let list = dll_new();
            dll_push_back(list, boxed(1));
            dll_push_back(list, boxed(3));
            assert_eq!(dll_insert_at(list, boxed(2), 1), DLL_SUCCESS);
            assert_eq!(dll_insert_at(list, ptr::null_mut(), 9), DLL_ERROR_OUT_OF_BOUNDS);

            let mut out: *mut c_void = ptr::null_mut();
            assert_eq!(dll_get(list, 1, &mut out), DLL_SUCCESS);
            unsafe {
                assert_eq!(*(out as *mut i32), 2);
            }
            assert_eq!(dll_get(list, 5, &mut out), DLL_ERROR_OUT_OF_BOUNDS);
            assert_eq!(dll_get(list, 0, ptr::null_mut()), DLL_ERROR_NULL_PTR);

            // 取回全部数据并释放
            while dll_len(list) > 0 {
                unsafe {
                    unboxed(dll_pop_front(list));
                }
            }
            dll_free(list);
        }

        #[test]
        fn test_ffi_remove() {
            let list = dll_new();
            let target = boxed(7);
            dll_push_back(list, target);
            dll_push_back(list, boxed(8));
            dll_push_back(list, target);

            // 按指针值匹配，两个节点保存同一指针
            assert_eq!(dll_remove_all(list, target), 2);
            assert_eq!(dll_len(list), 1);

            let removed = dll_remove_at(list, 0);
            assert!(!removed.is_null());
            unsafe {
                assert_eq!(unboxed(removed), 8);
                unboxed(target);
            }
            assert!(dll_remove_at(list, 0).is_null());
            dll_free(list);
        }

        #[test]
        fn test_ffi_iterator() {
            let list = dll_new();
            dll_push_back(list, boxed(1));
            dll_push_back(list, boxed(2));

            let iter = dll_into_iter(list);
            let mut seen = Vec::new();
            loop {
                let data = dll_iter_next(iter);
                if data.is_null() {
                    break;
                }
                unsafe {
                    seen.push(*(data as *mut i32));
                }
            }
            assert_eq!(seen, vec![1, 2]);
            dll_iter_free(iter);

            while dll_len(list) > 0 {
                unsafe {
                    unboxed(dll_pop_front(list));
                }
            }
            dll_free(list);
        }

        #[test]
        fn test_ffi_front_back() {
            let list = dll_new();
            dll_push_back(list, boxed(1));
            dll_push_back(list, boxed(2));
            unsafe {
                assert_eq!(*(dll_front(list) as *mut i32), 1);
                assert_eq!(*(dll_back(list) as *mut i32), 2);
            }
            assert!(!dll_front_mut(list).is_null());
            assert!(!dll_back_mut(list).is_null());

            while dll_len(list) > 0 {
                unsafe {
                    unboxed(dll_pop_front(list));
                }
            }
            dll_free(list);
        }
    }
}
