//! Go source for every generated list operation.
//!
//! Single-type templates are named `<Op><CONDITIONAL_TYPE>`, so the package's
//! own type gets the bare operation name. Cross-type and combiner templates
//! append the display forms of both sides. Test templates are named
//! `Test<Op><FTYPE>` after the basic-type operation they exercise.

use crate::template::{Family, Template};

pub const MAP: Template = Template::new("map", Family::Single, r#"// Map<CONDITIONAL_TYPE> applies f to every element of list and returns the results in order.
func Map<CONDITIONAL_TYPE>(f func(<TYPE>) <TYPE>, list []<TYPE>) []<TYPE> {
	if f == nil {
		return []<TYPE>{}
	}
	newList := make([]<TYPE>, len(list))
	for i, v := range list {
		newList[i] = f(v)
	}
	return newList
}
"#);

pub const FILTER: Template = Template::new("filter", Family::Single, r#"// Filter<CONDITIONAL_TYPE> returns the elements of list for which f returns true.
func Filter<CONDITIONAL_TYPE>(f func(<TYPE>) bool, list []<TYPE>) []<TYPE> {
	if f == nil {
		return []<TYPE>{}
	}
	var newList []<TYPE>
	for _, v := range list {
		if f(v) {
			newList = append(newList, v)
		}
	}
	return newList
}
"#);

pub const REMOVE: Template = Template::new("remove", Family::Single, r#"// Remove<CONDITIONAL_TYPE> returns the elements of list for which f returns false.
func Remove<CONDITIONAL_TYPE>(f func(<TYPE>) bool, list []<TYPE>) []<TYPE> {
	if f == nil {
		return []<TYPE>{}
	}
	var newList []<TYPE>
	for _, v := range list {
		if !f(v) {
			newList = append(newList, v)
		}
	}
	return newList
}
"#);

pub const SOME: Template = Template::new("some", Family::Single, r#"// Some<CONDITIONAL_TYPE> reports whether f returns true for at least one element of list.
func Some<CONDITIONAL_TYPE>(f func(<TYPE>) bool, list []<TYPE>) bool {
	if f == nil {
		return false
	}
	for _, v := range list {
		if f(v) {
			return true
		}
	}
	return false
}
"#);

pub const EVERY: Template = Template::new("every", Family::Single, r#"// Every<CONDITIONAL_TYPE> reports whether f returns true for every element of a non-empty list.
func Every<CONDITIONAL_TYPE>(f func(<TYPE>) bool, list []<TYPE>) bool {
	if f == nil || len(list) == 0 {
		return false
	}
	for _, v := range list {
		if !f(v) {
			return false
		}
	}
	return true
}
"#);

pub const DROP_WHILE: Template = Template::new("drop-while", Family::Single, r#"// DropWhile<CONDITIONAL_TYPE> drops leading elements while f returns true and returns the rest.
func DropWhile<CONDITIONAL_TYPE>(f func(<TYPE>) bool, list []<TYPE>) []<TYPE> {
	if f == nil {
		return []<TYPE>{}
	}
	for i, v := range list {
		if !f(v) {
			newList := make([]<TYPE>, len(list)-i)
			copy(newList, list[i:])
			return newList
		}
	}
	return []<TYPE>{}
}
"#);

pub const TAKE_WHILE: Template = Template::new("take-while", Family::Single, r#"// TakeWhile<CONDITIONAL_TYPE> returns leading elements of list while f returns true.
func TakeWhile<CONDITIONAL_TYPE>(f func(<TYPE>) bool, list []<TYPE>) []<TYPE> {
	if f == nil {
		return []<TYPE>{}
	}
	var newList []<TYPE>
	for _, v := range list {
		if !f(v) {
			return newList
		}
		newList = append(newList, v)
	}
	return newList
}
"#);

pub const PMAP: Template = Template::new("parallel-map", Family::Single, r#"// PMap<CONDITIONAL_TYPE> applies f to every element of list concurrently, keeping input order.
func PMap<CONDITIONAL_TYPE>(f func(<TYPE>) <TYPE>, list []<TYPE>) []<TYPE> {
	if f == nil {
		return []<TYPE>{}
	}
	newList := make([]<TYPE>, len(list))
	var wg sync.WaitGroup
	wg.Add(len(list))
	for i, v := range list {
		go func(i int, v <TYPE>) {
			defer wg.Done()
			newList[i] = f(v)
		}(i, v)
	}
	wg.Wait()
	return newList
}
"#);

pub const FILTER_MAP: Template = Template::new("filter-map", Family::Single, r#"// FilterMap<CONDITIONAL_TYPE> applies fMap to the elements of list for which fFilter returns true.
func FilterMap<CONDITIONAL_TYPE>(fFilter func(<TYPE>) bool, fMap func(<TYPE>) <TYPE>, list []<TYPE>) []<TYPE> {
	if fFilter == nil || fMap == nil {
		return []<TYPE>{}
	}
	var newList []<TYPE>
	for _, v := range list {
		if fFilter(v) {
			newList = append(newList, fMap(v))
		}
	}
	return newList
}
"#);

pub const REST: Template = Template::new("rest", Family::Single, r#"// Rest<CONDITIONAL_TYPE> returns every element of list after the first.
func Rest<CONDITIONAL_TYPE>(list []<TYPE>) []<TYPE> {
	if len(list) <= 1 {
		return []<TYPE>{}
	}
	newList := make([]<TYPE>, len(list)-1)
	copy(newList, list[1:])
	return newList
}
"#);

pub const REDUCE: Template = Template::new("reduce", Family::Single, r#"// Reduce<CONDITIONAL_TYPE> folds list with f, starting from the optional initializer or the first element.
func Reduce<CONDITIONAL_TYPE>(f func(<TYPE>, <TYPE>) <TYPE>, list []<TYPE>, initializer ...<TYPE>) <TYPE> {
	var acc <TYPE>
	if len(initializer) > 0 {
		acc = initializer[0]
	} else if len(list) > 0 {
		acc = list[0]
		list = list[1:]
	}
	if f == nil {
		return acc
	}
	for _, v := range list {
		acc = f(acc, v)
	}
	return acc
}
"#);

pub const DROP_LAST: Template = Template::new("drop-last", Family::Single, r#"// DropLast<CONDITIONAL_TYPE> returns every element of list except the last.
func DropLast<CONDITIONAL_TYPE>(list []<TYPE>) []<TYPE> {
	if len(list) <= 1 {
		return []<TYPE>{}
	}
	newList := make([]<TYPE>, len(list)-1)
	copy(newList, list[:len(list)-1])
	return newList
}
"#);

pub const MAP_IO: Template = Template::new("map-io", Family::PairwiseIo, r#"// Map<FINPUT_TYPE><FOUTPUT_TYPE> converts every element of list with f and returns the results in order.
func Map<FINPUT_TYPE><FOUTPUT_TYPE>(f func(<INPUT_TYPE>) <OUTPUT_TYPE>, list []<INPUT_TYPE>) []<OUTPUT_TYPE> {
	if f == nil {
		return []<OUTPUT_TYPE>{}
	}
	newList := make([]<OUTPUT_TYPE>, len(list))
	for i, v := range list {
		newList[i] = f(v)
	}
	return newList
}
"#);

pub const PMAP_IO: Template = Template::new("parallel-map-io", Family::PairwiseIo, r#"// PMap<FINPUT_TYPE><FOUTPUT_TYPE> converts every element of list with f concurrently, keeping input order.
func PMap<FINPUT_TYPE><FOUTPUT_TYPE>(f func(<INPUT_TYPE>) <OUTPUT_TYPE>, list []<INPUT_TYPE>) []<OUTPUT_TYPE> {
	if f == nil {
		return []<OUTPUT_TYPE>{}
	}
	newList := make([]<OUTPUT_TYPE>, len(list))
	var wg sync.WaitGroup
	wg.Add(len(list))
	for i, v := range list {
		go func(i int, v <INPUT_TYPE>) {
			defer wg.Done()
			newList[i] = f(v)
		}(i, v)
	}
	wg.Wait()
	return newList
}
"#);

pub const FILTER_MAP_IO: Template = Template::new("filter-map-io", Family::PairwiseIo, r#"// FilterMap<FINPUT_TYPE><FOUTPUT_TYPE> converts with fMap the elements of list for which fFilter returns true.
func FilterMap<FINPUT_TYPE><FOUTPUT_TYPE>(fFilter func(<INPUT_TYPE>) bool, fMap func(<INPUT_TYPE>) <OUTPUT_TYPE>, list []<INPUT_TYPE>) []<OUTPUT_TYPE> {
	if fFilter == nil || fMap == nil {
		return []<OUTPUT_TYPE>{}
	}
	var newList []<OUTPUT_TYPE>
	for _, v := range list {
		if fFilter(v) {
			newList = append(newList, fMap(v))
		}
	}
	return newList
}
"#);

pub const MERGE: Template = Template::new("merge", Family::Combiner, r#"// Merge<FINPUT_TYPE1><FINPUT_TYPE2> copies map1 and map2 into a new map; keys in map2 win.
func Merge<FINPUT_TYPE1><FINPUT_TYPE2>(map1, map2 map[<INPUT_TYPE1>]<INPUT_TYPE2>) map[<INPUT_TYPE1>]<INPUT_TYPE2> {
	newMap := make(map[<INPUT_TYPE1>]<INPUT_TYPE2>, len(map1)+len(map2))
	for k, v := range map1 {
		newMap[k] = v
	}
	for k, v := range map2 {
		newMap[k] = v
	}
	return newMap
}
"#);

pub const ZIP: Template = Template::new("zip", Family::Combiner, r#"// Zip<FINPUT_TYPE1><FINPUT_TYPE2> pairs list1[i] with list2[i] up to the shorter length.
func Zip<FINPUT_TYPE1><FINPUT_TYPE2>(list1 []<INPUT_TYPE1>, list2 []<INPUT_TYPE2>) map[<INPUT_TYPE1>]<INPUT_TYPE2> {
	minLen := len(list1)
	if len(list2) < minLen {
		minLen = len(list2)
	}
	newMap := make(map[<INPUT_TYPE1>]<INPUT_TYPE2>, minLen)
	for i := 0; i < minLen; i++ {
		newMap[list1[i]] = list2[i]
	}
	return newMap
}
"#);

pub const DROP_LAST_TEST: Template = Template::new("drop-last-test", Family::Test, r#"
func TestDropLast<FTYPE>(t *testing.T) {
	list := []<TYPE>{1, 2, 3, 4, 5}
	expectedList := []<TYPE>{1, 2, 3, 4}
	actualList := DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = []<TYPE>{1, 2}
	expectedList = []<TYPE>{1}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = []<TYPE>{1}
	expectedList = []<TYPE>{}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = []<TYPE>{}
	expectedList = []<TYPE>{}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = nil
	expectedList = []<TYPE>{}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}
}
"#);

pub const DROP_LAST_BOOL_TEST: Template = Template::new("drop-last-bool-test", Family::Test, r#"
func TestDropLast<FTYPE>(t *testing.T) {
	list := []<TYPE>{true, true, true, true, false}
	expectedList := []<TYPE>{true, true, true, true}
	actualList := DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = []<TYPE>{true, true}
	expectedList = []<TYPE>{true}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = []<TYPE>{true}
	expectedList = []<TYPE>{}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = []<TYPE>{}
	expectedList = []<TYPE>{}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = nil
	expectedList = []<TYPE>{}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}
}
"#);

pub const DROP_LAST_STR_TEST: Template = Template::new("drop-last-str-test", Family::Test, r#"
func TestDropLast<FTYPE>(t *testing.T) {
	list := []<TYPE>{"1", "2", "3", "4", "5"}
	expectedList := []<TYPE>{"1", "2", "3", "4"}
	actualList := DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = []<TYPE>{"1", "2"}
	expectedList = []<TYPE>{"1"}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = []<TYPE>{"1"}
	expectedList = []<TYPE>{}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = []<TYPE>{}
	expectedList = []<TYPE>{}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}

	list = nil
	expectedList = []<TYPE>{}
	actualList = DropLast<FTYPE>(list)
	if !reflect.DeepEqual(expectedList, actualList) {
		t.Errorf("TestDropLast<FTYPE> failed. actual_list=%v, expected_list=%v", actualList, expectedList)
	}
}
"#);

/// Single-type operations in emission order.
pub static SINGLE: [Template; 12] = [
    MAP, FILTER, REMOVE, SOME, EVERY, DROP_WHILE, TAKE_WHILE, PMAP, FILTER_MAP, REST, REDUCE, DROP_LAST,
];

/// Operations emitted once per ordered pair of differing input and output types.
pub static PAIRWISE_IO: [Template; 3] = [MAP_IO, PMAP_IO, FILTER_MAP_IO];

/// Operations emitted once per ordered pair of key and value types.
pub static COMBINER: [Template; 2] = [MERGE, ZIP];

/// Go tests for the basic-type catalogue, chosen by the kind of literal the
/// element type accepts.
pub static TESTS: [Template; 3] = [DROP_LAST_TEST, DROP_LAST_BOOL_TEST, DROP_LAST_STR_TEST];

pub fn all() -> impl Iterator<Item = &'static Template> {
    SINGLE.iter().chain(PAIRWISE_IO.iter()).chain(COMBINER.iter()).chain(TESTS.iter())
}
